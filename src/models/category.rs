use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display name shown in navigation.
    pub name: String,

    /// URL slug, unique across the table. Upserts key on this column.
    pub slug: String,

    pub description: String,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Category record as declared in the fixture file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryFixture {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub slug: String,

    #[serde(default)]
    pub description: String,
}

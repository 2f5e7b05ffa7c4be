use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'comments' table in the database.
/// Comments are append-only; there is no unique key besides the id.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub recipe_id: i64,
    pub author: String,
    pub email: String,
    pub rating: i32,
    pub content: String,

    /// Moderation status: 'approved' or 'pending'.
    pub status: String,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Comment record as declared in the fixture file.
/// All fixture comments attach to the first seeded recipe.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentFixture {
    #[validate(length(min = 1, max = 100))]
    pub author: String,

    #[validate(email)]
    pub email: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5."))]
    pub rating: i32,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Comment must be between 1 and 1000 characters"
    ))]
    pub text: String,

    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "approved".to_string()
}

// src/models/settings.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'site_settings' table: a singleton row with fixed id 1.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SiteSettings {
    pub id: i64,
    pub site_name: String,
    pub site_description: String,
    pub meta_title: String,
    pub meta_description: String,
}

/// Site settings as declared in the fixture file. The id is not part of the
/// fixture; the seeder always writes the fixed singleton key.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFixture {
    #[validate(length(min = 1, max = 200))]
    pub site_name: String,

    #[serde(default)]
    pub site_description: String,

    #[serde(default)]
    pub meta_title: String,

    #[serde(default)]
    pub meta_description: String,
}

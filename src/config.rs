// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,

    /// Path of the JSON fixture file holding the sample dataset.
    pub fixture_path: String,

    /// When true, recipes and comments that already exist are skipped
    /// instead of inserted again. Off by default: a repeated run duplicates
    /// recipes and comments while categories and settings stay unique.
    pub skip_existing: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let fixture_path = env::var("SEED_FIXTURE_PATH")
            .unwrap_or_else(|_| "fixtures/seed.json".to_string());

        let skip_existing = env::var("SEED_SKIP_EXISTING")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            database_url,
            rust_log,
            fixture_path,
            skip_existing,
        }
    }
}

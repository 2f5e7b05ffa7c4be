// src/seed/fixtures.rs

use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::CategoryFixture, comment::CommentFixture, recipe::RecipeFixture,
        settings::SettingsFixture, user::AdminFixture,
    },
};

/// The complete sample dataset for one seed run, as read from a JSON
/// fixture file.
///
/// Keeping the data outside the binary lets the same executable provision
/// different environments without a rebuild; the shipped
/// `fixtures/seed.json` carries the stock sample content.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SeedFixture {
    #[validate(nested)]
    pub admin: AdminFixture,

    #[validate(length(min = 1), nested)]
    pub categories: Vec<CategoryFixture>,

    #[validate(nested)]
    pub recipes: Vec<RecipeFixture>,

    #[validate(nested)]
    pub comments: Vec<CommentFixture>,

    #[validate(nested)]
    pub settings: SettingsFixture,
}

impl SeedFixture {
    /// Parses and validates a fixture document.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let fixture: SeedFixture = serde_json::from_str(raw)?;
        fixture.validate()?;
        fixture.check_references()?;
        Ok(fixture)
    }

    /// Every category slug referenced by a recipe must be declared in the
    /// same document, so the category stage always produces the ids the
    /// recipe stage will look up.
    fn check_references(&self) -> Result<(), AppError> {
        let declared: HashSet<&str> = self.categories.iter().map(|c| c.slug.as_str()).collect();

        for recipe in &self.recipes {
            for slug in &recipe.categories {
                if !declared.contains(slug.as_str()) {
                    return Err(AppError::Fixture(format!(
                        "recipe '{}' references undeclared category '{}'",
                        recipe.title, slug
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Loads and validates the fixture file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<SeedFixture, AppError> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::Fixture(format!("cannot read fixture file {}: {}", path.display(), e))
    })?;

    SeedFixture::from_json(&raw)
}

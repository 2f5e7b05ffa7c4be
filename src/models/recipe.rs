// src/models/recipe.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

/// One ingredient line: display name plus a free-form amount ("2 шт.", "300 г").
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Ingredient {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub amount: String,
}

/// One numbered preparation step. Steps are stored in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    pub step_number: i32,

    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// Macro-nutrient breakdown per serving, in grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrition {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Represents the 'recipes' table in the database.
///
/// The full recipe content (ingredients, ordered instructions, nutrition,
/// tips) is embedded as structured JSON rather than normalized into side
/// tables. `sqlx::types::Json` handles automatic serialization/deserialization.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,

    pub title: String,

    pub description: String,

    /// Cover image as an inline data URI.
    pub image: String,

    /// Total preparation time in minutes.
    pub cooking_time: i32,

    pub calories: i32,

    pub servings: i32,

    /// Display name of the recipe author.
    pub author: String,

    pub views: i32,

    pub rating: f64,

    pub tags: Json<Vec<String>>,

    /// Publication status: 'published' or 'draft'.
    pub status: String,

    pub ingredients: Json<Vec<Ingredient>>,

    pub instructions: Json<Vec<InstructionStep>>,

    pub nutrition: Json<Nutrition>,

    pub tips: Json<Vec<String>>,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Recipe record as declared in the fixture file.
///
/// Categories are referenced by slug; the seeder resolves them to ids after
/// the category stage has completed.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFixture {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    pub image: String,

    pub cooking_time: i32,

    pub calories: i32,

    pub servings: i32,

    #[validate(length(min = 1, max = 100))]
    pub author: String,

    #[serde(default)]
    pub views: i32,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "default_status")]
    pub status: String,

    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<Ingredient>,

    #[validate(length(min = 1), nested)]
    pub instructions: Vec<InstructionStep>,

    pub nutrition: Nutrition,

    #[serde(default)]
    pub tips: Vec<String>,

    /// Slugs of the categories this recipe is filed under.
    #[validate(length(min = 1, message = "A recipe must name at least one category."))]
    pub categories: Vec<String>,
}

fn default_status() -> String {
    "published".to_string()
}

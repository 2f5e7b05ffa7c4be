// tests/fixture_tests.rs

use recipe_blog::error::AppError;
use recipe_blog::seed::fixtures::SeedFixture;
use recipe_blog::utils::hash::{hash_password, verify_password};

const DEFAULT_FIXTURE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/seed.json"));

#[test]
fn shipped_fixture_parses_and_validates() {
    let fixture = SeedFixture::from_json(DEFAULT_FIXTURE).expect("shipped fixture must be valid");

    assert_eq!(fixture.categories.len(), 7);
    assert_eq!(fixture.recipes.len(), 3);
    assert_eq!(fixture.comments.len(), 3);
    assert_eq!(fixture.admin.role, "admin");
    assert_eq!(fixture.settings.site_name, "Домашние рецепты");
}

#[test]
fn first_recipe_is_filed_under_main_courses_only() {
    let fixture = SeedFixture::from_json(DEFAULT_FIXTURE).unwrap();

    assert_eq!(fixture.recipes[0].categories, vec!["main-courses"]);
}

#[test]
fn recipe_instructions_are_numbered_in_order() {
    let fixture = SeedFixture::from_json(DEFAULT_FIXTURE).unwrap();

    for recipe in &fixture.recipes {
        for (idx, step) in recipe.instructions.iter().enumerate() {
            assert_eq!(step.step_number, idx as i32 + 1, "recipe: {}", recipe.title);
        }
    }
}

#[test]
fn undeclared_category_reference_is_rejected() {
    let raw = r#"{
        "admin": {
            "username": "admin",
            "email": "admin@example.com",
            "password": "admin123"
        },
        "categories": [
            { "name": "Супы", "slug": "soups", "description": "" }
        ],
        "recipes": [
            {
                "title": "Борщ",
                "description": "Наваристый борщ",
                "image": "data:image/svg+xml;utf8,<svg/>",
                "cookingTime": 120,
                "calories": 320,
                "servings": 6,
                "author": "Мария",
                "ingredients": [ { "name": "Свёкла", "amount": "2 шт." } ],
                "instructions": [ { "stepNumber": 1, "text": "Сварите бульон." } ],
                "nutrition": { "protein": 18.0, "fat": 14.0, "carbs": 28.0 },
                "categories": ["missing"]
            }
        ],
        "comments": [],
        "settings": { "siteName": "Рецепты" }
    }"#;

    let err = SeedFixture::from_json(raw).unwrap_err();

    match err {
        AppError::Fixture(msg) => assert!(msg.contains("undeclared category")),
        other => panic!("expected fixture error, got: {other}"),
    }
}

#[test]
fn invalid_comment_rating_is_rejected() {
    let mut doc: serde_json::Value = serde_json::from_str(DEFAULT_FIXTURE).unwrap();
    doc["comments"][0]["rating"] = serde_json::json!(11);

    let err = SeedFixture::from_json(&doc.to_string()).unwrap_err();
    assert!(matches!(err, AppError::Fixture(_)));
}

#[test]
fn admin_credential_hashes_and_verifies() {
    let fixture = SeedFixture::from_json(DEFAULT_FIXTURE).unwrap();

    let hash = hash_password(&fixture.admin.password).unwrap();
    assert!(verify_password(&fixture.admin.password, &hash).unwrap());
    assert!(!verify_password("wrong-password", &hash).unwrap());
}

// src/seed/mod.rs

pub mod fixtures;

use std::collections::HashMap;

use sqlx::types::Json;
use sqlx::PgPool;
use tokio::task::JoinSet;

use crate::{
    error::AppError,
    models::{
        category::CategoryFixture, comment::CommentFixture, recipe::RecipeFixture,
        settings::SettingsFixture, user::AdminFixture,
    },
    utils::hash::hash_password,
};

pub use fixtures::SeedFixture;

/// Fixed primary key of the singleton site-settings row.
pub const SITE_SETTINGS_ID: i64 = 1;

/// Knobs for a single seed run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedOptions {
    /// When set, recipes (matched by title) and comments (matched by
    /// recipe, author and text) that already exist are skipped instead of
    /// inserted again.
    ///
    /// Off by default: re-running the procedure duplicates recipes and
    /// comments, while categories and the settings row stay unique. The
    /// asymmetry is inherited behavior; this flag surfaces the choice
    /// instead of resolving it silently.
    pub skip_existing: bool,
}

/// Per-entity counts of rows actually written by a run.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub users: u64,
    pub categories: u64,
    pub recipes: u64,
    pub comments: u64,
    pub settings: u64,
}

/// Runs the full provisioning sequence against `pool`.
///
/// Stages run in strict order because each depends on identifiers produced
/// by the previous one: admin account, categories, recipes (linked to the
/// category ids), comments on the first recipe, site settings. Any stage
/// error aborts the whole run; nothing is retried and nothing is rolled
/// back.
pub async fn run(
    pool: &PgPool,
    fixture: &SeedFixture,
    opts: SeedOptions,
) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    report.users = upsert_admin(pool, &fixture.admin).await?;
    tracing::info!("Admin account ready: {}", fixture.admin.username);

    let category_ids = upsert_categories(pool, &fixture.categories).await?;
    report.categories = category_ids.len() as u64;
    tracing::info!("Categories ready: {}", category_ids.len());

    let (recipe_ids, recipes_created) =
        create_recipes(pool, &fixture.recipes, &category_ids, opts).await?;
    report.recipes = recipes_created;
    tracing::info!("Recipes created: {}", recipes_created);

    // All fixture comments land on the first recipe.
    if let Some(&first_recipe_id) = recipe_ids.first() {
        report.comments = create_comments(pool, first_recipe_id, &fixture.comments, opts).await?;
        tracing::info!("Comments created: {}", report.comments);
    }

    report.settings = upsert_settings(pool, &fixture.settings).await?;
    tracing::info!("Site settings ready");

    Ok(report)
}

/// Hashes the fixture credential and upserts the administrator account,
/// keyed on the unique username. An existing account is left untouched.
async fn upsert_admin(pool: &PgPool, admin: &AdminFixture) -> Result<u64, AppError> {
    let password_hash = hash_password(&admin.password)?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (username, email, password, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (username) DO NOTHING
        "#,
    )
    .bind(&admin.username)
    .bind(&admin.email)
    .bind(&password_hash)
    .bind(&admin.role)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Upserts all categories, keyed on the unique slug, and returns the
/// resulting `slug -> id` mapping.
///
/// The upserts are issued concurrently: each request targets a distinct
/// slug, so there is no ordering requirement among them. The stage completes
/// only once every request has finished; the first failure aborts it.
async fn upsert_categories(
    pool: &PgPool,
    categories: &[CategoryFixture],
) -> Result<HashMap<String, i64>, AppError> {
    let mut tasks = JoinSet::new();

    for category in categories.iter().cloned() {
        let pool = pool.clone();
        tasks.spawn(async move {
            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO categories (name, slug, description)
                VALUES ($1, $2, $3)
                ON CONFLICT (slug) DO UPDATE
                SET name = EXCLUDED.name,
                    description = EXCLUDED.description
                RETURNING id
                "#,
            )
            .bind(&category.name)
            .bind(&category.slug)
            .bind(&category.description)
            .fetch_one(&pool)
            .await?;

            Ok::<(String, i64), sqlx::Error>((category.slug, id))
        });
    }

    let mut ids = HashMap::new();
    while let Some(joined) = tasks.join_next().await {
        let (slug, id) = joined.map_err(|e| AppError::Database(e.to_string()))??;
        ids.insert(slug, id);
    }

    Ok(ids)
}

/// Creates the fixture recipes and their category join rows.
///
/// Returns the recipe ids in fixture order plus the number of rows actually
/// inserted. Creation is unconditional unless `skip_existing` is set.
async fn create_recipes(
    pool: &PgPool,
    recipes: &[RecipeFixture],
    category_ids: &HashMap<String, i64>,
    opts: SeedOptions,
) -> Result<(Vec<i64>, u64), AppError> {
    let mut ids = Vec::with_capacity(recipes.len());
    let mut created = 0;

    for recipe in recipes {
        if opts.skip_existing {
            let existing: Option<i64> =
                sqlx::query_scalar("SELECT id FROM recipes WHERE title = $1 LIMIT 1")
                    .bind(&recipe.title)
                    .fetch_optional(pool)
                    .await?;

            if let Some(id) = existing {
                tracing::debug!("Recipe already present, skipping: {}", recipe.title);
                ids.push(id);
                continue;
            }
        }

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO recipes
                (title, description, image, cooking_time, calories, servings,
                 author, views, rating, tags, status, ingredients,
                 instructions, nutrition, tips)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id
            "#,
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.image)
        .bind(recipe.cooking_time)
        .bind(recipe.calories)
        .bind(recipe.servings)
        .bind(&recipe.author)
        .bind(recipe.views)
        .bind(recipe.rating)
        .bind(Json(&recipe.tags))
        .bind(&recipe.status)
        .bind(Json(&recipe.ingredients))
        .bind(Json(&recipe.instructions))
        .bind(Json(&recipe.nutrition))
        .bind(Json(&recipe.tips))
        .fetch_one(pool)
        .await?;

        for slug in &recipe.categories {
            let category_id = category_ids.get(slug).ok_or_else(|| {
                AppError::Fixture(format!(
                    "recipe '{}' references unknown category '{}'",
                    recipe.title, slug
                ))
            })?;

            sqlx::query(
                r#"
                INSERT INTO recipe_categories (recipe_id, category_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(id)
            .bind(category_id)
            .execute(pool)
            .await?;
        }

        ids.push(id);
        created += 1;
    }

    Ok((ids, created))
}

/// Inserts the fixture comments, all attached to `recipe_id`.
/// Append-only: there is no unique key, so inserts are unconditional unless
/// `skip_existing` is set.
async fn create_comments(
    pool: &PgPool,
    recipe_id: i64,
    comments: &[CommentFixture],
    opts: SeedOptions,
) -> Result<u64, AppError> {
    let mut created = 0;

    for comment in comments {
        if opts.skip_existing {
            let existing: Option<i64> = sqlx::query_scalar(
                r#"
                SELECT id FROM comments
                WHERE recipe_id = $1 AND author = $2 AND content = $3
                LIMIT 1
                "#,
            )
            .bind(recipe_id)
            .bind(&comment.author)
            .bind(&comment.text)
            .fetch_optional(pool)
            .await?;

            if existing.is_some() {
                tracing::debug!("Comment already present, skipping: {}", comment.author);
                continue;
            }
        }

        sqlx::query(
            r#"
            INSERT INTO comments (recipe_id, author, email, rating, content, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(recipe_id)
        .bind(&comment.author)
        .bind(&comment.email)
        .bind(comment.rating)
        .bind(&comment.text)
        .bind(&comment.status)
        .execute(pool)
        .await?;

        created += 1;
    }

    Ok(created)
}

/// Upserts the singleton site-settings row under its fixed id.
async fn upsert_settings(pool: &PgPool, settings: &SettingsFixture) -> Result<u64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO site_settings
            (id, site_name, site_description, meta_title, meta_description)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO UPDATE
        SET site_name = EXCLUDED.site_name,
            site_description = EXCLUDED.site_description,
            meta_title = EXCLUDED.meta_title,
            meta_description = EXCLUDED.meta_description
        "#,
    )
    .bind(SITE_SETTINGS_ID)
    .bind(&settings.site_name)
    .bind(&settings.site_description)
    .bind(&settings.meta_title)
    .bind(&settings.meta_description)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

// src/main.rs

use dotenvy::dotenv;
use recipe_blog::config::Config;
use recipe_blog::error::AppError;
use recipe_blog::seed::{self, SeedOptions};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "seed.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if let Err(e) = run(&config).await {
        tracing::error!("Seeding failed: {}", e);
        eprintln!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), AppError> {
    // Fixture problems should surface before a connection is ever opened.
    let fixture = seed::fixtures::load(&config.fixture_path)?;
    tracing::info!("Fixture loaded from {}", config.fixture_path);

    // A single attempt: persistence being unavailable is terminal for the
    // run, the same as any later stage failure.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connected...");

    tracing::info!("Running migrations...");
    let migrated = sqlx::migrate!("./migrations").run(&pool).await;

    let report = match migrated {
        Ok(()) => {
            tracing::info!("Migrations applied successfully.");
            seed::run(
                &pool,
                &fixture,
                SeedOptions {
                    skip_existing: config.skip_existing,
                },
            )
            .await
        }
        Err(e) => Err(AppError::from(e)),
    };

    // The pool is released exactly once, on success and failure alike.
    pool.close().await;

    let report = report?;
    tracing::info!(
        "Seed complete: {} user(s), {} categories, {} recipes, {} comments, {} settings row(s)",
        report.users,
        report.categories,
        report.recipes,
        report.comments,
        report.settings
    );

    Ok(())
}

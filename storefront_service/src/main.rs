use crate::api::context::AppState;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use storefront_auth::token::JwtValidationArgs;
use storefront_entrypoint::{Environment, StorefrontEntrypoint};

mod api;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    StorefrontEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = crate::config::Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    // Connect to the storefront database
    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to storefront db")?;

    tracing::info!(
        min_connections,
        max_connections,
        "initialized storefront db connection"
    );

    storefront_db_migrator::STOREFRONT_DB_MIGRATIONS
        .run(&db)
        .await
        .context("could not run storefront db migrations")?;

    tracing::info!("ran storefront db migrations");

    let jwt_validation_args =
        JwtValidationArgs::from_env().context("could not read jwt validation args")?;
    tracing::info!("initialized jwt validation args");

    api::setup_and_serve(AppState {
        db,
        jwt_validation_args,
        config: Arc::new(config),
    })
    .await?;
    Ok(())
}

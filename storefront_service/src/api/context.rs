use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;
use storefront_auth::token::JwtValidationArgs;

use crate::config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    /// Storefront database connection
    pub db: PgPool,
    pub jwt_validation_args: JwtValidationArgs,
    pub config: Arc<Config>,
}

use axum::{
    Router,
    routing::{get, put},
};

pub mod get_customers;
pub mod get_me;
pub mod update_me;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_customers::get_customers_handler))
        .route("/me", get(get_me::get_me_handler))
        .route("/me", put(update_me::update_me_handler))
}

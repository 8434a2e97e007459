use axum::{
    Router,
    routing::{get, post},
};

pub mod get_order;
pub mod get_orders;
pub mod place_order;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(place_order::place_order_handler))
        .route("/", get(get_orders::get_orders_handler))
        .route("/:order_id", get(get_order::get_order_handler))
}

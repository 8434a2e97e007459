use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub mod create_collection;
pub mod delete_collection;
pub mod get_collection;
pub mod get_collections;
pub mod update_collection;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_collections::get_collections_handler))
        .route("/", post(create_collection::create_collection_handler))
        .route(
            "/:collection_id",
            get(get_collection::get_collection_handler),
        )
        .route(
            "/:collection_id",
            put(update_collection::update_collection_handler),
        )
        .route(
            "/:collection_id",
            delete(delete_collection::delete_collection_handler),
        )
}

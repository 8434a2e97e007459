use axum::{
    Json,
    extract::{self, Path, State},
    http::StatusCode,
};
use models_storefront::cart::CartItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::{context::AppState, error::db_error_response};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddCartItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

#[utoipa::path(
        post,
        tag = "carts",
        path = "/carts/{cart_id}/items",
        operation_id = "add_cart_item",
        responses(
            (status = 200, body=CartItem, description = "the post-merge line"),
            (status = 400, body=String),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn add_cart_item_handler(
    State(ctx): State<AppState>,
    Path(cart_id): Path<Uuid>,
    extract::Json(req): extract::Json<AddCartItemRequest>,
) -> Result<Json<CartItem>, (StatusCode, String)> {
    let item = storefront_db_client::carts::add_cart_item::add_cart_item(
        &ctx.db,
        cart_id,
        req.product_id,
        req.quantity,
    )
    .await
    .map_err(|e| db_error_response("unable to add cart item", e))?;

    Ok(Json(item))
}

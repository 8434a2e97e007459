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
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[utoipa::path(
        patch,
        tag = "carts",
        path = "/carts/{cart_id}/items/{item_id}",
        operation_id = "update_cart_item",
        responses(
            (status = 200, body=CartItem),
            (status = 400, body=String),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn update_cart_item_handler(
    State(ctx): State<AppState>,
    Path((cart_id, item_id)): Path<(Uuid, i64)>,
    extract::Json(req): extract::Json<UpdateCartItemRequest>,
) -> Result<Json<CartItem>, (StatusCode, String)> {
    let item = storefront_db_client::carts::update_cart_item::update_cart_item(
        &ctx.db,
        cart_id,
        item_id,
        req.quantity,
    )
    .await
    .map_err(|e| db_error_response("unable to update cart item", e))?;

    Ok(Json(item))
}

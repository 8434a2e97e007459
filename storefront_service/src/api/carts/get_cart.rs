use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use super::CartResponse;
use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        get,
        tag = "carts",
        path = "/carts/{cart_id}",
        operation_id = "get_cart",
        responses(
            (status = 200, body=CartResponse),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_cart_handler(
    State(ctx): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> Result<Json<CartResponse>, (StatusCode, String)> {
    let cart = storefront_db_client::carts::get_cart::get_cart(&ctx.db, cart_id)
        .await
        .map_err(|e| db_error_response("unable to fetch cart", e))?;

    Ok(Json(CartResponse::from(cart)))
}

use axum::{Json, extract::State, http::StatusCode};
use models_storefront::cart::Cart;

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        post,
        tag = "carts",
        path = "/carts",
        operation_id = "create_cart",
        responses(
            (status = 201, body=Cart, description = "the id is the cart's opaque token"),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn create_cart_handler(
    State(ctx): State<AppState>,
) -> Result<(StatusCode, Json<Cart>), (StatusCode, String)> {
    let cart = storefront_db_client::carts::create_cart::create_cart(&ctx.db)
        .await
        .map_err(|e| db_error_response("unable to create cart", e))?;

    Ok((StatusCode::CREATED, Json(cart)))
}

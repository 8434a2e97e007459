use axum::{
    Json,
    extract::{self, Extension, State},
    http::StatusCode,
};
use models_storefront::{order::OrderWithItems, user::UserContext};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::{context::AppState, error::db_error_response};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    /// Token of the cart to turn into an order
    pub cart_id: Uuid,
}

#[utoipa::path(
        post,
        tag = "orders",
        path = "/orders",
        operation_id = "place_order",
        responses(
            (status = 201, body=OrderWithItems),
            (status = 400, body=String, description = "the cart is empty"),
            (status = 401, body=String),
            (status = 404, body=String, description = "no cart with the given token"),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn place_order_handler(
    State(ctx): State<AppState>,
    user_context: Extension<UserContext>,
    extract::Json(req): extract::Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderWithItems>), (StatusCode, String)> {
    let order = storefront_db_client::orders::place_order::place_order(
        &ctx.db,
        &user_context.user_id,
        req.cart_id,
    )
    .await
    .map_err(|e| db_error_response("unable to place order", e))?;

    Ok((StatusCode::CREATED, Json(order)))
}

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use models_storefront::{order::OrderWithItems, user::UserContext};

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        get,
        tag = "orders",
        path = "/orders/{order_id}",
        operation_id = "get_order",
        responses(
            (status = 200, body=OrderWithItems),
            (status = 401, body=String),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_order_handler(
    State(ctx): State<AppState>,
    user_context: Extension<UserContext>,
    Path(order_id): Path<i64>,
) -> Result<Json<OrderWithItems>, (StatusCode, String)> {
    let order = storefront_db_client::orders::get_order::get_order(&ctx.db, &user_context, order_id)
        .await
        .map_err(|e| db_error_response("unable to fetch order", e))?;

    Ok(Json(order))
}

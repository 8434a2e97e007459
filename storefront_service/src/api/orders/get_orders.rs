use axum::{Json, extract::Extension, extract::State, http::StatusCode};
use models_storefront::{order::OrderWithItems, user::UserContext};

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        get,
        tag = "orders",
        path = "/orders",
        operation_id = "get_orders",
        responses(
            (status = 200, body=Vec<OrderWithItems>, description = "staff sees all orders, everyone else only their own"),
            (status = 401, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_orders_handler(
    State(ctx): State<AppState>,
    user_context: Extension<UserContext>,
) -> Result<Json<Vec<OrderWithItems>>, (StatusCode, String)> {
    let orders = storefront_db_client::orders::get_orders::get_orders(&ctx.db, &user_context)
        .await
        .map_err(|e| db_error_response("unable to list orders", e))?;

    Ok(Json(orders))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        delete,
        tag = "carts",
        path = "/carts/{cart_id}/items/{item_id}",
        operation_id = "remove_cart_item",
        responses(
            (status = 204, description = "removing the last line leaves an empty cart"),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn remove_cart_item_handler(
    State(ctx): State<AppState>,
    Path((cart_id, item_id)): Path<(Uuid, i64)>,
) -> Result<StatusCode, (StatusCode, String)> {
    storefront_db_client::carts::remove_cart_item::remove_cart_item(&ctx.db, cart_id, item_id)
        .await
        .map_err(|e| db_error_response("unable to remove cart item", e))?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        delete,
        tag = "carts",
        path = "/carts/{cart_id}",
        operation_id = "delete_cart",
        responses(
            (status = 204),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn delete_cart_handler(
    State(ctx): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    storefront_db_client::carts::delete_cart::delete_cart(&ctx.db, cart_id)
        .await
        .map_err(|e| db_error_response("unable to delete cart", e))?;

    Ok(StatusCode::NO_CONTENT)
}

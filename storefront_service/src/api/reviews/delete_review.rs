use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        delete,
        tag = "reviews",
        path = "/products/{product_id}/reviews/{review_id}",
        operation_id = "delete_review",
        responses(
            (status = 204),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn delete_review_handler(
    State(ctx): State<AppState>,
    Path((product_id, review_id)): Path<(i64, i64)>,
) -> Result<StatusCode, (StatusCode, String)> {
    storefront_db_client::reviews::delete_review::delete_review(&ctx.db, product_id, review_id)
        .await
        .map_err(|e| db_error_response("unable to delete review", e))?;

    Ok(StatusCode::NO_CONTENT)
}

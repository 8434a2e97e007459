use axum::{
    Json,
    extract::{self, Path, State},
    http::StatusCode,
};
use models_storefront::review::Review;

use super::ReviewRequest;
use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        post,
        tag = "reviews",
        path = "/products/{product_id}/reviews",
        operation_id = "create_review",
        responses(
            (status = 201, body=Review),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn create_review_handler(
    State(ctx): State<AppState>,
    Path(product_id): Path<i64>,
    extract::Json(req): extract::Json<ReviewRequest>,
) -> Result<(StatusCode, Json<Review>), (StatusCode, String)> {
    let review =
        storefront_db_client::reviews::create_review::create_review(&ctx.db, product_id, req.into())
            .await
            .map_err(|e| db_error_response("unable to create review", e))?;

    Ok((StatusCode::CREATED, Json(review)))
}

use axum::{
    Json,
    extract::{self, Path, State},
    http::StatusCode,
};
use models_storefront::review::Review;

use super::ReviewRequest;
use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        put,
        tag = "reviews",
        path = "/products/{product_id}/reviews/{review_id}",
        operation_id = "update_review",
        responses(
            (status = 200, body=Review),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn update_review_handler(
    State(ctx): State<AppState>,
    Path((product_id, review_id)): Path<(i64, i64)>,
    extract::Json(req): extract::Json<ReviewRequest>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let review = storefront_db_client::reviews::update_review::update_review(
        &ctx.db,
        product_id,
        review_id,
        req.into(),
    )
    .await
    .map_err(|e| db_error_response("unable to update review", e))?;

    Ok(Json(review))
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use models_storefront::review::Review;

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        get,
        tag = "reviews",
        path = "/products/{product_id}/reviews",
        operation_id = "get_reviews",
        responses(
            (status = 200, body=Vec<Review>),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_reviews_handler(
    State(ctx): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Vec<Review>>, (StatusCode, String)> {
    let reviews = storefront_db_client::reviews::get_reviews::get_reviews(&ctx.db, product_id)
        .await
        .map_err(|e| db_error_response("unable to list reviews", e))?;

    Ok(Json(reviews))
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::ProductResponse;
use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        get,
        tag = "products",
        path = "/products/{product_id}",
        operation_id = "get_product",
        responses(
            (status = 200, body=ProductResponse),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_product_handler(
    State(ctx): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<ProductResponse>, (StatusCode, String)> {
    let product = storefront_db_client::products::get_product::get_product(&ctx.db, product_id)
        .await
        .map_err(|e| db_error_response("unable to fetch product", e))?;

    Ok(Json(ProductResponse::from(product)))
}

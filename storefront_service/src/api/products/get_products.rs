use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use models_storefront::{catalog::ProductFilter, pagination::PageParams};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ProductResponse;
use crate::api::{context::AppState, error::db_error_response};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductsPageResponse {
    pub items: Vec<ProductResponse>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

#[utoipa::path(
        get,
        tag = "products",
        path = "/products",
        operation_id = "get_products",
        params(PageParams),
        responses(
            (status = 200, body=ProductsPageResponse),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_products_handler(
    State(ctx): State<AppState>,
    Query(filter): Query<ProductFilter>,
    Query(params): Query<PageParams>,
) -> Result<Json<ProductsPageResponse>, (StatusCode, String)> {
    let page = storefront_db_client::products::get_products::get_products(&ctx.db, &filter, &params)
        .await
        .map_err(|e| db_error_response("unable to list products", e))?;

    Ok(Json(ProductsPageResponse {
        items: page.items.into_iter().map(ProductResponse::from).collect(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
    }))
}

use axum::{
    Json,
    extract::{self, Extension, Path, State},
    http::StatusCode,
};
use models_storefront::user::UserContext;

use super::{ProductRequest, ProductResponse};
use crate::api::{
    context::AppState,
    error::{db_error_response, require_staff},
};

#[utoipa::path(
        put,
        tag = "products",
        path = "/products/{product_id}",
        operation_id = "update_product",
        responses(
            (status = 200, body=ProductResponse),
            (status = 401, body=String),
            (status = 403, body=String),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user))]
pub async fn update_product_handler(
    State(ctx): State<AppState>,
    user: Option<Extension<UserContext>>,
    Path(product_id): Path<i64>,
    extract::Json(req): extract::Json<ProductRequest>,
) -> Result<Json<ProductResponse>, (StatusCode, String)> {
    require_staff(user.as_deref())?;

    let product = storefront_db_client::products::update_product::update_product(
        &ctx.db,
        product_id,
        req.into(),
    )
    .await
    .map_err(|e| db_error_response("unable to update product", e))?;

    Ok(Json(ProductResponse::from(product)))
}

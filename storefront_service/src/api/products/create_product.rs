use axum::{
    Json,
    extract::{self, Extension, State},
    http::StatusCode,
};
use models_storefront::user::UserContext;

use super::{ProductRequest, ProductResponse};
use crate::api::{
    context::AppState,
    error::{db_error_response, require_staff},
};

#[utoipa::path(
        post,
        tag = "products",
        path = "/products",
        operation_id = "create_product",
        responses(
            (status = 201, body=ProductResponse),
            (status = 401, body=String),
            (status = 403, body=String),
            (status = 404, body=String, description = "the collection does not exist"),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user))]
pub async fn create_product_handler(
    State(ctx): State<AppState>,
    user: Option<Extension<UserContext>>,
    extract::Json(req): extract::Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), (StatusCode, String)> {
    require_staff(user.as_deref())?;

    let product = storefront_db_client::products::create_product::create_product(
        &ctx.db,
        req.into(),
    )
    .await
    .map_err(|e| db_error_response("unable to create product", e))?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

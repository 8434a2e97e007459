use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
};
use models_storefront::user::UserContext;

use crate::api::{
    context::AppState,
    error::{db_error_response, require_staff},
};

#[utoipa::path(
        delete,
        tag = "products",
        path = "/products/{product_id}",
        operation_id = "delete_product",
        responses(
            (status = 204),
            (status = 401, body=String),
            (status = 403, body=String),
            (status = 404, body=String),
            (status = 409, body=String, description = "the product is referenced by an order item"),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user))]
pub async fn delete_product_handler(
    State(ctx): State<AppState>,
    user: Option<Extension<UserContext>>,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    require_staff(user.as_deref())?;

    storefront_db_client::products::delete_product::delete_product(&ctx.db, product_id)
        .await
        .map_err(|e| db_error_response("unable to delete product", e))?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{Json, extract::State, http::StatusCode};
use models_storefront::catalog::CollectionWithCount;

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        get,
        tag = "collections",
        path = "/collections",
        operation_id = "get_collections",
        responses(
            (status = 200, body=Vec<CollectionWithCount>),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_collections_handler(
    State(ctx): State<AppState>,
) -> Result<Json<Vec<CollectionWithCount>>, (StatusCode, String)> {
    let collections = storefront_db_client::collections::get_collections::get_collections(&ctx.db)
        .await
        .map_err(|e| db_error_response("unable to list collections", e))?;

    Ok(Json(collections))
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use models_storefront::catalog::CollectionWithCount;

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        get,
        tag = "collections",
        path = "/collections/{collection_id}",
        operation_id = "get_collection",
        responses(
            (status = 200, body=CollectionWithCount),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx))]
pub async fn get_collection_handler(
    State(ctx): State<AppState>,
    Path(collection_id): Path<i64>,
) -> Result<Json<CollectionWithCount>, (StatusCode, String)> {
    let collection =
        storefront_db_client::collections::get_collection::get_collection(&ctx.db, collection_id)
            .await
            .map_err(|e| db_error_response("unable to fetch collection", e))?;

    Ok(Json(collection))
}

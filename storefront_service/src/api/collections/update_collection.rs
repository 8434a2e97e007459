use axum::{
    Json,
    extract::{self, Extension, Path, State},
    http::StatusCode,
};
use models_storefront::{catalog::Collection, user::UserContext};

use super::create_collection::CreateCollectionRequest;
use crate::api::{
    context::AppState,
    error::{db_error_response, require_staff},
};

#[utoipa::path(
        put,
        tag = "collections",
        path = "/collections/{collection_id}",
        operation_id = "update_collection",
        responses(
            (status = 200, body=Collection),
            (status = 401, body=String),
            (status = 403, body=String),
            (status = 404, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user))]
pub async fn update_collection_handler(
    State(ctx): State<AppState>,
    user: Option<Extension<UserContext>>,
    Path(collection_id): Path<i64>,
    extract::Json(req): extract::Json<CreateCollectionRequest>,
) -> Result<Json<Collection>, (StatusCode, String)> {
    require_staff(user.as_deref())?;

    let collection = storefront_db_client::collections::update_collection::update_collection(
        &ctx.db,
        collection_id,
        &req.title,
    )
    .await
    .map_err(|e| db_error_response("unable to update collection", e))?;

    Ok(Json(collection))
}

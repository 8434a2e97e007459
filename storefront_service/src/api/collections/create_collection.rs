use axum::{
    Json,
    extract::{self, Extension, State},
    http::StatusCode,
};
use models_storefront::{catalog::Collection, user::UserContext};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{
    context::AppState,
    error::{db_error_response, require_staff},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub title: String,
}

#[utoipa::path(
        post,
        tag = "collections",
        path = "/collections",
        operation_id = "create_collection",
        responses(
            (status = 201, body=Collection),
            (status = 401, body=String),
            (status = 403, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user))]
pub async fn create_collection_handler(
    State(ctx): State<AppState>,
    user: Option<Extension<UserContext>>,
    extract::Json(req): extract::Json<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<Collection>), (StatusCode, String)> {
    require_staff(user.as_deref())?;

    let collection =
        storefront_db_client::collections::create_collection::create_collection(&ctx.db, &req.title)
            .await
            .map_err(|e| db_error_response("unable to create collection", e))?;

    Ok((StatusCode::CREATED, Json(collection)))
}

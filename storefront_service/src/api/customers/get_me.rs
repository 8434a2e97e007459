use axum::{Json, extract::Extension, extract::State, http::StatusCode};
use models_storefront::{customer::Customer, user::UserContext};

use crate::api::{context::AppState, error::db_error_response};

#[utoipa::path(
        get,
        tag = "customers",
        path = "/customers/me",
        operation_id = "get_me",
        responses(
            (status = 200, body=Customer, description = "provisioned on first access"),
            (status = 401, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_me_handler(
    State(ctx): State<AppState>,
    user_context: Extension<UserContext>,
) -> Result<Json<Customer>, (StatusCode, String)> {
    let customer = storefront_db_client::customers::get_or_create_customer::get_or_create_customer(
        &ctx.db,
        &user_context.user_id,
    )
    .await
    .map_err(|e| db_error_response("unable to fetch customer profile", e))?;

    Ok(Json(customer))
}

use axum::{
    Json,
    extract::{self, Extension, State},
    http::StatusCode,
};
use models_storefront::{
    customer::{Customer, Membership},
    user::UserContext,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{context::AppState, error::db_error_response};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub membership: Membership,
}

#[utoipa::path(
        put,
        tag = "customers",
        path = "/customers/me",
        operation_id = "update_me",
        responses(
            (status = 200, body=Customer),
            (status = 401, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn update_me_handler(
    State(ctx): State<AppState>,
    user_context: Extension<UserContext>,
    extract::Json(req): extract::Json<UpdateCustomerRequest>,
) -> Result<Json<Customer>, (StatusCode, String)> {
    let customer = storefront_db_client::customers::update_customer::update_customer(
        &ctx.db,
        &user_context.user_id,
        &req.first_name,
        &req.last_name,
        req.membership,
    )
    .await
    .map_err(|e| db_error_response("unable to update customer profile", e))?;

    Ok(Json(customer))
}

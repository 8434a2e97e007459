use axum::{Json, extract::Extension, extract::State, http::StatusCode};
use models_storefront::{customer::Customer, user::UserContext};

use crate::api::{
    context::AppState,
    error::{db_error_response, require_staff},
};

#[utoipa::path(
        get,
        tag = "customers",
        path = "/customers",
        operation_id = "get_customers",
        responses(
            (status = 200, body=Vec<Customer>),
            (status = 401, body=String),
            (status = 403, body=String),
            (status = 500, body=String),
        )
    )]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_customers_handler(
    State(ctx): State<AppState>,
    user_context: Extension<UserContext>,
) -> Result<Json<Vec<Customer>>, (StatusCode, String)> {
    require_staff(Some(&user_context))?;

    let customers = storefront_db_client::customers::get_customers::get_customers(&ctx.db)
        .await
        .map_err(|e| db_error_response("unable to list customers", e))?;

    Ok(Json(customers))
}

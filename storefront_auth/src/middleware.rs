use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use models_storefront::{response::ErrorResponse, user::UserContext};

use crate::{
    error::AuthError,
    headers::extract_access_token_from_request_headers,
    token::{JwtValidationArgs, validate_access_token},
};

/// Decodes the JWT and attaches a [UserContext] with the caller's user id and
/// staff flag. Use this middleware on routes that always require an
/// authenticated caller; otherwise use [attach_user].
pub async fn decode_jwt(
    State(jwt_validation_args): State<JwtValidationArgs>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let access_token = extract_access_token_from_request_headers(req.headers()).map_err(|e| {
        tracing::trace!(error=?e, "unable to get access token");
        unauthorized("unauthorized")
    })?;

    let claims = validate_access_token(&access_token, &jwt_validation_args).map_err(
        |e| match e {
            AuthError::JwtExpired => unauthorized("jwt expired"),
            _ => {
                tracing::error!(error=?e, "unable to decode jwt");
                unauthorized("unauthorized")
            }
        },
    )?;

    req.extensions_mut().insert(UserContext {
        user_id: claims.sub,
        is_staff: claims.is_staff,
    });

    Ok(next.run(req).await)
}

/// Attempts to decode the JWT and attach the caller's [UserContext].
/// If there is no usable token the request continues anonymously.
pub async fn attach_user(
    State(jwt_validation_args): State<JwtValidationArgs>,
    mut req: Request,
    next: Next,
) -> Response {
    let access_token = match extract_access_token_from_request_headers(req.headers()) {
        Ok(token) => token,
        Err(e) => {
            tracing::trace!(error=?e, "no access token, continuing anonymously");
            return next.run(req).await;
        }
    };

    match validate_access_token(&access_token, &jwt_validation_args) {
        Ok(claims) => {
            req.extensions_mut().insert(UserContext {
                user_id: claims.sub,
                is_staff: claims.is_staff,
            });
        }
        Err(e) => {
            tracing::trace!(error=?e, "invalid access token, continuing anonymously");
        }
    }

    next.run(req).await
}

fn unauthorized(message: &'static str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse { message })).into_response()
}

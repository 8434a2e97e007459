//! Access-token validation and the axum middleware that attaches the caller's
//! [`models_storefront::user::UserContext`] to the request.

pub mod error;
pub mod headers;
pub mod middleware;
pub mod token;

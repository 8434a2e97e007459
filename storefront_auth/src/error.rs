use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is missing")]
    MissingAuthHeader,
    #[error("authorization header is malformed")]
    MalformedAuthHeader,
    #[error("jwt expired")]
    JwtExpired,
    #[error("jwt validation failed: {details}")]
    JwtValidationFailed { details: String },
    #[error("JWT_SECRET, JWT_AUDIENCE and JWT_ISSUER must be provided: {0}")]
    MissingEnv(#[from] std::env::VarError),
}

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::error::AuthError;

/// Everything needed to validate an incoming access token.
#[derive(Clone)]
pub struct JwtValidationArgs {
    audience: String,
    issuer: String,
    secret: String,
}

impl JwtValidationArgs {
    /// create a new instance of self by reading the required data from the environment
    pub fn from_env() -> Result<Self, AuthError> {
        Ok(Self {
            audience: std::env::var("JWT_AUDIENCE")?,
            issuer: std::env::var("JWT_ISSUER")?,
            secret: std::env::var("JWT_SECRET")?,
        })
    }

    pub fn new(audience: String, issuer: String, secret: String) -> Self {
        Self {
            audience,
            issuer,
            secret,
        }
    }
}

/// Claims carried by a storefront access token.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct StoreAccessToken {
    /// The audience of the token
    pub aud: String,
    /// The expiration time of the token
    pub exp: usize,
    /// The issuer of the token
    pub iss: String,
    /// The caller's opaque user id
    pub sub: String,
    /// Whether the caller has elevated (staff) privilege
    #[serde(default)]
    pub is_staff: bool,
}

/// Verify and decode an access token against the configured
/// audience/issuer/secret.
pub fn validate_access_token(
    access_token: &str,
    args: &JwtValidationArgs,
) -> Result<StoreAccessToken, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    validation.leeway = 0;
    validation.set_audience(&[&args.audience]);
    validation.set_issuer(&[&args.issuer]);

    match decode::<StoreAccessToken>(
        access_token,
        &DecodingKey::from_secret(args.secret.as_bytes()),
        &validation,
    ) {
        Ok(decoded) => Ok(decoded.claims),
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(AuthError::JwtExpired),
            _ => Err(AuthError::JwtValidationFailed {
                details: e.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn args() -> JwtValidationArgs {
        JwtValidationArgs::new(
            "storefront".to_string(),
            "storefront-auth".to_string(),
            "test-secret".to_string(),
        )
    }

    fn token_with(exp_offset_secs: i64, is_staff: bool, secret: &str) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset_secs) as usize;
        let claims = StoreAccessToken {
            aud: "storefront".to_string(),
            exp,
            iss: "storefront-auth".to_string(),
            sub: "user-1".to_string(),
            is_staff,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_round_trips() {
        let token = token_with(3600, true, "test-secret");
        let claims = validate_access_token(&token, &args()).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert!(claims.is_staff);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = token_with(-3600, false, "test-secret");
        assert!(matches!(
            validate_access_token(&token, &args()),
            Err(AuthError::JwtExpired)
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = token_with(3600, false, "other-secret");
        assert!(matches!(
            validate_access_token(&token, &args()),
            Err(AuthError::JwtValidationFailed { .. })
        ));
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let exp = (chrono::Utc::now().timestamp() + 3600) as usize;
        let claims = StoreAccessToken {
            aud: "someone-else".to_string(),
            exp,
            iss: "storefront-auth".to_string(),
            sub: "user-1".to_string(),
            is_staff: false,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(matches!(
            validate_access_token(&token, &args()),
            Err(AuthError::JwtValidationFailed { .. })
        ));
    }
}

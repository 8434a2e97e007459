use axum::http::StatusCode;
use models_storefront::user::UserContext;
use storefront_db_client::StoreDbError;

/// Translates a db-client error to the matching protocol response. Database
/// failures are logged and answered with a generic message; taxonomy errors
/// surface their own message.
pub fn db_error_response(context: &'static str, err: StoreDbError) -> (StatusCode, String) {
    match err {
        StoreDbError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        StoreDbError::Conflict { .. } => (StatusCode::CONFLICT, err.to_string()),
        StoreDbError::InvalidArgument { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        StoreDbError::Database(e) => {
            tracing::error!(error=?e, "{}", context);
            (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
        }
    }
}

/// Catalog writes are staff-only. An anonymous caller gets 401, an
/// authenticated non-staff caller 403.
pub fn require_staff(user: Option<&UserContext>) -> Result<(), (StatusCode, String)> {
    match user {
        None => Err((StatusCode::UNAUTHORIZED, "unauthorized".to_string())),
        Some(user) if !user.is_staff => {
            Err((StatusCode::FORBIDDEN, "staff privilege required".to_string()))
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, message) =
            db_error_response("unable to fetch product", StoreDbError::not_found("product"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "product not found");
    }

    #[test]
    fn test_conflict_maps_to_409_with_relationship_message() {
        let (status, message) = db_error_response(
            "unable to delete collection",
            StoreDbError::conflict(
                "collection cannot be deleted because it is associated with products",
            ),
        );
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(message.contains("associated with products"));
    }

    #[test]
    fn test_database_error_hides_details() {
        let (status, message) = db_error_response(
            "unable to fetch product",
            StoreDbError::Database(sqlx::Error::RowNotFound),
        );
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "unable to fetch product");
    }

    #[test]
    fn test_require_staff() {
        assert_eq!(
            require_staff(None).unwrap_err().0,
            StatusCode::UNAUTHORIZED
        );
        let shopper = UserContext {
            user_id: "user-1".to_string(),
            is_staff: false,
        };
        assert_eq!(
            require_staff(Some(&shopper)).unwrap_err().0,
            StatusCode::FORBIDDEN
        );
        let staff = UserContext {
            user_id: "admin-1".to_string(),
            is_staff: true,
        };
        assert!(require_staff(Some(&staff)).is_ok());
    }
}

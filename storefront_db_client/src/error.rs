use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreDbError>;

/// Error taxonomy surfaced by the db client. Handlers translate these to the
/// matching protocol status; only [StoreDbError::Database] is internal.
#[derive(Debug, Error)]
pub enum StoreDbError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("{details}")]
    Conflict { details: String },
    #[error("{details}")]
    InvalidArgument { details: String },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreDbError {
    pub fn not_found(entity: &'static str) -> Self {
        StoreDbError::NotFound { entity }
    }

    pub fn conflict(details: impl Into<String>) -> Self {
        StoreDbError::Conflict {
            details: details.into(),
        }
    }

    pub fn invalid_argument(details: impl Into<String>) -> Self {
        StoreDbError::InvalidArgument {
            details: details.into(),
        }
    }
}

/// True when the underlying database error is a foreign key violation.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    foreign_key_constraint(err).is_some()
}

/// The name of the violated foreign key constraint, when the error is one.
/// Lets callers with more than one foreign key name the missing entity.
pub(crate) fn foreign_key_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
            db_err.constraint()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_entity() {
        assert_eq!(
            StoreDbError::not_found("product").to_string(),
            "product not found"
        );
    }

    #[test]
    fn test_conflict_message_passes_through() {
        let err = StoreDbError::conflict(
            "collection cannot be deleted because it is associated with products",
        );
        assert_eq!(
            err.to_string(),
            "collection cannot be deleted because it is associated with products"
        );
    }
}

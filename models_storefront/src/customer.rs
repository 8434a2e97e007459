use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer membership tier. Stored as the `membership` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "membership", rename_all = "lowercase")]
pub enum Membership {
    Bronze,
    Silver,
    Gold,
}

impl Default for Membership {
    fn default() -> Self {
        Membership::Bronze
    }
}

/// A customer profile. Exactly one row per identity principal; the row is
/// auto-provisioned with empty names on first access by that identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    /// Opaque identity id from the auth collaborator. Unique.
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub membership: Membership,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Membership::Gold).unwrap(), "\"gold\"");
        let m: Membership = serde_json::from_str("\"bronze\"").unwrap();
        assert_eq!(m, Membership::Bronze);
    }

    #[test]
    fn test_membership_default_is_bronze() {
        assert_eq!(Membership::default(), Membership::Bronze);
    }
}

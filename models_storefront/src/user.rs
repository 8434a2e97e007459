use serde::{Deserialize, Serialize};

/// Used to store information about the caller for the lifetime of a request.
/// Attached as a request extension by the auth middleware.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct UserContext {
    /// Opaque identity id for the caller
    pub user_id: String,
    /// Whether the caller has elevated (staff) privilege
    pub is_staff: bool,
}

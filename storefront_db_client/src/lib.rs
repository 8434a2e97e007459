//! All Postgres access for the storefront, one module per aggregate.
//!
//! Every write that spans more than one statement runs inside a transaction;
//! referential delete-guards pair an in-transaction pre-check (for a clean
//! error message) with an `ON DELETE RESTRICT` foreign key (for correctness
//! under races).

pub mod carts;
pub mod collections;
pub mod customers;
pub mod error;
pub mod orders;
pub mod products;
pub mod reviews;

use uuid::{NoContext, Timestamp, Uuid};

pub use error::{Result, StoreDbError};

/// Cart tokens are v7 uuids: globally unique, opaque, not guessable from one
/// another the way sequential ids are.
pub fn generate_uuid_v7() -> Uuid {
    Uuid::new_v7(Timestamp::now(NoContext))
}

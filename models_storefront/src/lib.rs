//! Shared domain models for the storefront services.
//!
//! Entities mirror the database tables one to one; derived values
//! (tax-inclusive prices, cart totals, per-collection product counts) are
//! computed, never stored.

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod order;
pub mod pagination;
pub mod response;
pub mod review;
pub mod user;

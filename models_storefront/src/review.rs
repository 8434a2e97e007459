use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product review. Always bound to the product id from the request path;
/// any product id in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub product_id: i64,
    pub date: NaiveDate,
    pub name: String,
    pub description: String,
}

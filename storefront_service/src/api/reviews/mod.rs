use axum::{
    Router,
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use storefront_db_client::reviews::ReviewFields;
use utoipa::ToSchema;

pub mod create_review;
pub mod delete_review;
pub mod get_reviews;
pub mod update_review;

use crate::api::context::AppState;

/// Nested under `/products/:product_id/reviews`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_reviews::get_reviews_handler))
        .route("/", post(create_review::create_review_handler))
        .route("/:review_id", put(update_review::update_review_handler))
        .route("/:review_id", delete(delete_review::delete_review_handler))
}

/// Writable review fields. The product a review belongs to comes from the
/// request path; a `product_id` in the payload is ignored, so a caller cannot
/// write a review onto a different product than the one they posted under.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewRequest {
    pub date: NaiveDate,
    pub name: String,
    pub description: String,
}

impl From<ReviewRequest> for ReviewFields {
    fn from(req: ReviewRequest) -> Self {
        Self {
            date: req.date,
            name: req.name,
            description: req.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_product_id_is_ignored() {
        // a spoofed product_id in the body deserializes away; only the path
        // value ever reaches the database layer
        let req: ReviewRequest = serde_json::from_str(
            r#"{"date":"2026-08-01","name":"Ada","description":"great","product_id":999}"#,
        )
        .unwrap();
        let fields = ReviewFields::from(req);
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
    }
}

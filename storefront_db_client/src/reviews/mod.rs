use chrono::NaiveDate;

pub mod create_review;
pub mod delete_review;
pub mod get_reviews;
pub mod update_review;

/// Writable review fields, shared by create and update. The product a review
/// belongs to always comes from the request path, never from these fields.
#[derive(Debug, Clone)]
pub struct ReviewFields {
    pub date: NaiveDate,
    pub name: String,
    pub description: String,
}

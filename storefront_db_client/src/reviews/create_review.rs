use models_storefront::review::Review;
use sqlx::{Pool, Postgres};

use super::ReviewFields;
use crate::{Result, StoreDbError, error::is_foreign_key_violation};

/// Inserts a review bound to the product id from the request path. A payload
/// naming some other product cannot redirect the write.
#[tracing::instrument(skip(db))]
pub async fn create_review(
    db: &Pool<Postgres>,
    product_id: i64,
    fields: ReviewFields,
) -> Result<Review> {
    let review = sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO "Review" ("productId", date, name, description)
        VALUES ($1, $2, $3, $4)
        RETURNING id, "productId" AS product_id, date, name, description
        "#,
    )
    .bind(product_id)
    .bind(fields.date)
    .bind(&fields.name)
    .bind(&fields.description)
    .fetch_one(db)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            StoreDbError::not_found("product")
        } else {
            StoreDbError::from(e)
        }
    })?;

    Ok(review)
}

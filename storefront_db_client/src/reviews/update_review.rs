use models_storefront::review::Review;
use sqlx::{Pool, Postgres};

use super::ReviewFields;
use crate::{Result, StoreDbError};

/// Updates a review, scoped to the product id from the request path so a
/// review can only be edited under the product it belongs to.
#[tracing::instrument(skip(db))]
pub async fn update_review(
    db: &Pool<Postgres>,
    product_id: i64,
    review_id: i64,
    fields: ReviewFields,
) -> Result<Review> {
    let review = sqlx::query_as::<_, Review>(
        r#"
        UPDATE "Review"
        SET date = $3, name = $4, description = $5
        WHERE id = $2 AND "productId" = $1
        RETURNING id, "productId" AS product_id, date, name, description
        "#,
    )
    .bind(product_id)
    .bind(review_id)
    .bind(fields.date)
    .bind(&fields.name)
    .bind(&fields.description)
    .fetch_optional(db)
    .await?
    .ok_or(StoreDbError::not_found("review"))?;

    Ok(review)
}

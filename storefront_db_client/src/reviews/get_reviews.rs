use models_storefront::review::Review;
use sqlx::{Pool, Postgres};

use crate::{Result, StoreDbError};

#[tracing::instrument(skip(db))]
pub async fn get_reviews(db: &Pool<Postgres>, product_id: i64) -> Result<Vec<Review>> {
    let product_exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM "Product" WHERE id = $1)
        "#,
    )
    .bind(product_id)
    .fetch_one(db)
    .await?;

    if !product_exists {
        return Err(StoreDbError::not_found("product"));
    }

    let reviews = sqlx::query_as::<_, Review>(
        r#"
        SELECT id, "productId" AS product_id, date, name, description
        FROM "Review"
        WHERE "productId" = $1
        ORDER BY id
        "#,
    )
    .bind(product_id)
    .fetch_all(db)
    .await?;

    Ok(reviews)
}

use sqlx::{Pool, Postgres};

use crate::{Result, StoreDbError};

#[tracing::instrument(skip(db))]
pub async fn delete_review(db: &Pool<Postgres>, product_id: i64, review_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM "Review" WHERE id = $2 AND "productId" = $1
        "#,
    )
    .bind(product_id)
    .bind(review_id)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreDbError::not_found("review"));
    }

    Ok(())
}

use sqlx::{Pool, Postgres};

use crate::{Result, StoreDbError};

/// Deletes a product unless any order item still references it. Cart lines
/// and reviews referencing the product are removed by their CASCADE keys.
///
/// Same shape as the collection delete-guard: in-transaction pre-check for
/// the message, `ON DELETE RESTRICT` foreign key for races.
#[tracing::instrument(skip(db))]
pub async fn delete_product(db: &Pool<Postgres>, product_id: i64) -> Result<()> {
    let mut transaction = db.begin().await?;

    let order_item_count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM "OrderItem" WHERE "productId" = $1
        "#,
    )
    .bind(product_id)
    .fetch_one(transaction.as_mut())
    .await?;

    if order_item_count > 0 {
        return Err(StoreDbError::conflict(
            "product cannot be deleted because it is associated with an order item",
        ));
    }

    let result = sqlx::query(
        r#"
        DELETE FROM "Product" WHERE id = $1
        "#,
    )
    .bind(product_id)
    .execute(transaction.as_mut())
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreDbError::not_found("product"));
    }

    transaction.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog", "orders")))]
    async fn test_delete_ordered_product_conflicts(pool: Pool<Postgres>) {
        let err = delete_product(&pool, 1).await.unwrap_err();
        assert!(matches!(err, StoreDbError::Conflict { .. }));

        let still_there =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Product" WHERE id = 1"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(still_there, 1);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog", "orders")))]
    async fn test_delete_unordered_product_succeeds(pool: Pool<Postgres>) {
        delete_product(&pool, 2).await.unwrap();

        let remaining =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Product" WHERE id = 2"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(remaining, 0);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog")))]
    async fn test_delete_missing_product_is_not_found(pool: Pool<Postgres>) {
        let err = delete_product(&pool, 999).await.unwrap_err();
        assert!(matches!(err, StoreDbError::NotFound { entity: "product" }));
    }
}

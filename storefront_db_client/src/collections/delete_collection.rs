use sqlx::{Pool, Postgres};

use crate::{Result, StoreDbError};

/// Deletes a collection unless any product still references it.
///
/// The existence check and the delete share one transaction so the check
/// observes a consistent snapshot; the `ON DELETE RESTRICT` foreign key
/// rejects the delete should a product land in a racing transaction.
#[tracing::instrument(skip(db))]
pub async fn delete_collection(db: &Pool<Postgres>, collection_id: i64) -> Result<()> {
    let mut transaction = db.begin().await?;

    let product_count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM "Product" WHERE "collectionId" = $1
        "#,
    )
    .bind(collection_id)
    .fetch_one(transaction.as_mut())
    .await?;

    if product_count > 0 {
        return Err(StoreDbError::conflict(
            "collection cannot be deleted because it is associated with products",
        ));
    }

    let result = sqlx::query(
        r#"
        DELETE FROM "Collection" WHERE id = $1
        "#,
    )
    .bind(collection_id)
    .execute(transaction.as_mut())
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreDbError::not_found("collection"));
    }

    transaction.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog")))]
    async fn test_delete_collection_with_products_conflicts(pool: Pool<Postgres>) {
        let err = delete_collection(&pool, 1).await.unwrap_err();
        assert!(matches!(err, StoreDbError::Conflict { .. }));

        let still_there =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Collection" WHERE id = 1"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(still_there, 1);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog")))]
    async fn test_delete_empty_collection_succeeds(pool: Pool<Postgres>) {
        delete_collection(&pool, 2).await.unwrap();

        let remaining =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Collection" WHERE id = 2"#)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(remaining, 0);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog")))]
    async fn test_delete_missing_collection_is_not_found(pool: Pool<Postgres>) {
        let err = delete_collection(&pool, 999).await.unwrap_err();
        assert!(matches!(err, StoreDbError::NotFound { entity: "collection" }));
    }
}

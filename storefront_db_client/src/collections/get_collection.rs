use models_storefront::catalog::CollectionWithCount;
use sqlx::{Pool, Postgres};

use crate::{Result, StoreDbError};

#[tracing::instrument(skip(db))]
pub async fn get_collection(
    db: &Pool<Postgres>,
    collection_id: i64,
) -> Result<CollectionWithCount> {
    let collection = sqlx::query_as::<_, CollectionWithCount>(
        r#"
        SELECT c.id, c.title, COUNT(p.id) AS products_count
        FROM "Collection" c
        LEFT JOIN "Product" p ON p."collectionId" = c.id
        WHERE c.id = $1
        GROUP BY c.id, c.title
        "#,
    )
    .bind(collection_id)
    .fetch_optional(db)
    .await?
    .ok_or(StoreDbError::not_found("collection"))?;

    Ok(collection)
}

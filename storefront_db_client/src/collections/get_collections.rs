use models_storefront::catalog::CollectionWithCount;
use sqlx::{Pool, Postgres};

use crate::Result;

/// Lists every collection annotated with the number of products referencing
/// it. The count is aggregated here at query time, never stored.
#[tracing::instrument(skip(db))]
pub async fn get_collections(db: &Pool<Postgres>) -> Result<Vec<CollectionWithCount>> {
    let collections = sqlx::query_as::<_, CollectionWithCount>(
        r#"
        SELECT c.id, c.title, COUNT(p.id) AS products_count
        FROM "Collection" c
        LEFT JOIN "Product" p ON p."collectionId" = c.id
        GROUP BY c.id, c.title
        ORDER BY c.id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(collections)
}

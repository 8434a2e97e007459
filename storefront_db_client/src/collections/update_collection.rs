use models_storefront::catalog::Collection;
use sqlx::{Pool, Postgres};

use crate::{Result, StoreDbError};

#[tracing::instrument(skip(db))]
pub async fn update_collection(
    db: &Pool<Postgres>,
    collection_id: i64,
    title: &str,
) -> Result<Collection> {
    let collection = sqlx::query_as::<_, Collection>(
        r#"
        UPDATE "Collection"
        SET title = $2
        WHERE id = $1
        RETURNING id, title
        "#,
    )
    .bind(collection_id)
    .bind(title)
    .fetch_optional(db)
    .await?
    .ok_or(StoreDbError::not_found("collection"))?;

    Ok(collection)
}

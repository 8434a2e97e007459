use models_storefront::catalog::Collection;
use sqlx::{Pool, Postgres};

use crate::Result;

#[tracing::instrument(skip(db))]
pub async fn create_collection(db: &Pool<Postgres>, title: &str) -> Result<Collection> {
    let collection = sqlx::query_as::<_, Collection>(
        r#"
        INSERT INTO "Collection" (title)
        VALUES ($1)
        RETURNING id, title
        "#,
    )
    .bind(title)
    .fetch_one(db)
    .await?;

    Ok(collection)
}

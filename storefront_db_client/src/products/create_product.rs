use models_storefront::catalog::Product;
use sqlx::{Pool, Postgres};

use super::ProductFields;
use crate::{Result, StoreDbError};

#[tracing::instrument(skip(db))]
pub async fn create_product(db: &Pool<Postgres>, fields: ProductFields) -> Result<Product> {
    let collection_exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM "Collection" WHERE id = $1)
        "#,
    )
    .bind(fields.collection_id)
    .fetch_one(db)
    .await?;

    if !collection_exists {
        return Err(StoreDbError::not_found("collection"));
    }

    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO "Product" (title, description, slug, price, inventory, "collectionId")
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, description, slug, price, inventory,
                  "collectionId" AS collection_id, "lastUpdated" AS last_updated
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.slug)
    .bind(fields.price)
    .bind(fields.inventory)
    .bind(fields.collection_id)
    .fetch_one(db)
    .await?;

    Ok(product)
}

use models_storefront::catalog::Product;
use sqlx::{Pool, Postgres};

use super::ProductFields;
use crate::{Result, StoreDbError};

#[tracing::instrument(skip(db))]
pub async fn update_product(
    db: &Pool<Postgres>,
    product_id: i64,
    fields: ProductFields,
) -> Result<Product> {
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
        UPDATE "Product"
        SET title = $2, description = $3, slug = $4, price = $5,
            inventory = $6, "collectionId" = $7, "lastUpdated" = NOW()
        WHERE id = $1
        RETURNING id, title, description, slug, price, inventory,
                  "collectionId" AS collection_id, "lastUpdated" AS last_updated
        "#,
    )
    .bind(product_id)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.slug)
    .bind(fields.price)
    .bind(fields.inventory)
    .bind(fields.collection_id)
    .fetch_optional(db)
    .await?
    .ok_or(StoreDbError::not_found("product"))?;

    Ok(product)
}

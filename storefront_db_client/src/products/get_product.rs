use models_storefront::catalog::Product;
use sqlx::{Pool, Postgres};

use crate::{Result, StoreDbError};

#[tracing::instrument(skip(db))]
pub async fn get_product(db: &Pool<Postgres>, product_id: i64) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        SELECT id, title, description, slug, price, inventory,
               "collectionId" AS collection_id, "lastUpdated" AS last_updated
        FROM "Product"
        WHERE id = $1
        "#,
    )
    .bind(product_id)
    .fetch_optional(db)
    .await?
    .ok_or(StoreDbError::not_found("product"))?;

    Ok(product)
}

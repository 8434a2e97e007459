use models_storefront::cart::Cart;
use sqlx::{Pool, Postgres};

use crate::{Result, generate_uuid_v7};

/// Creates an empty cart. The returned id is the cart's opaque token.
#[tracing::instrument(skip(db))]
pub async fn create_cart(db: &Pool<Postgres>) -> Result<Cart> {
    let cart = sqlx::query_as::<_, Cart>(
        r#"
        INSERT INTO "Cart" (id)
        VALUES ($1)
        RETURNING id, "createdAt" AS created_at
        "#,
    )
    .bind(generate_uuid_v7())
    .fetch_one(db)
    .await?;

    Ok(cart)
}

use models_storefront::cart::CartItem;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{Result, StoreDbError};

/// Replaces a cart line's quantity. Non-positive quantities are rejected; a
/// caller wanting the line gone removes it instead.
#[tracing::instrument(skip(db))]
pub async fn update_cart_item(
    db: &Pool<Postgres>,
    cart_id: Uuid,
    item_id: i64,
    quantity: i32,
) -> Result<CartItem> {
    if quantity < 1 {
        return Err(StoreDbError::invalid_argument(
            "quantity must be a positive integer",
        ));
    }

    let item = sqlx::query_as::<_, CartItem>(
        r#"
        UPDATE "CartItem"
        SET quantity = $3
        WHERE id = $2 AND "cartId" = $1
        RETURNING id, "cartId" AS cart_id, "productId" AS product_id, quantity
        "#,
    )
    .bind(cart_id)
    .bind(item_id)
    .bind(quantity)
    .fetch_optional(db)
    .await?
    .ok_or(StoreDbError::not_found("cart item"))?;

    Ok(item)
}

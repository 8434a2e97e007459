use models_storefront::cart::{Cart, CartItemWithProduct, CartProduct, CartWithItems};
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{Result, StoreDbError};

#[derive(sqlx::FromRow)]
struct CartItemRow {
    id: i64,
    quantity: i32,
    product_id: i64,
    title: String,
    price: Decimal,
}

/// Loads a cart with its lines eagerly joined to their product (id, title,
/// current price). Totals are derived from this read, not stored.
#[tracing::instrument(skip(db))]
pub async fn get_cart(db: &Pool<Postgres>, cart_id: Uuid) -> Result<CartWithItems> {
    let cart = sqlx::query_as::<_, Cart>(
        r#"
        SELECT id, "createdAt" AS created_at FROM "Cart" WHERE id = $1
        "#,
    )
    .bind(cart_id)
    .fetch_optional(db)
    .await?
    .ok_or(StoreDbError::not_found("cart"))?;

    let rows = sqlx::query_as::<_, CartItemRow>(
        r#"
        SELECT ci.id, ci.quantity, p.id AS product_id, p.title, p.price
        FROM "CartItem" ci
        JOIN "Product" p ON p.id = ci."productId"
        WHERE ci."cartId" = $1
        ORDER BY ci.id
        "#,
    )
    .bind(cart_id)
    .fetch_all(db)
    .await?;

    let items = rows
        .into_iter()
        .map(|row| CartItemWithProduct {
            id: row.id,
            quantity: row.quantity,
            product: CartProduct {
                id: row.product_id,
                title: row.title,
                price: row.price,
            },
        })
        .collect();

    Ok(CartWithItems {
        id: cart.id,
        created_at: cart.created_at,
        items,
    })
}

use models_storefront::order::{Order, OrderItem, OrderWithItems};
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{Result, StoreDbError, customers::get_or_create_customer::get_or_create_customer};

#[derive(sqlx::FromRow)]
struct CartLine {
    product_id: i64,
    quantity: i32,
    price: Decimal,
}

/// Places an order from a cart, all inside one transaction:
/// resolve (or provision) the customer, snapshot every cart line into an
/// order item at the product's price at this instant, then delete the cart.
/// Any failure rolls the whole thing back and leaves the cart untouched.
#[tracing::instrument(skip(db))]
pub async fn place_order(
    db: &Pool<Postgres>,
    user_id: &str,
    cart_id: Uuid,
) -> Result<OrderWithItems> {
    let mut transaction = db.begin().await?;

    let customer = get_or_create_customer(transaction.as_mut(), user_id).await?;

    let cart_row = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id FROM "Cart" WHERE id = $1 FOR UPDATE
        "#,
    )
    .bind(cart_id)
    .fetch_optional(transaction.as_mut())
    .await?;

    if cart_row.is_none() {
        return Err(StoreDbError::not_found("cart"));
    }

    // Lock the lines and their products so the price snapshot and a
    // concurrent price update cannot interleave.
    let lines = sqlx::query_as::<_, CartLine>(
        r#"
        SELECT ci."productId" AS product_id, ci.quantity, p.price
        FROM "CartItem" ci
        JOIN "Product" p ON p.id = ci."productId"
        WHERE ci."cartId" = $1
        ORDER BY ci.id
        FOR UPDATE
        "#,
    )
    .bind(cart_id)
    .fetch_all(transaction.as_mut())
    .await?;

    if lines.is_empty() {
        return Err(StoreDbError::invalid_argument("cart is empty"));
    }

    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO "Order" ("customerId")
        VALUES ($1)
        RETURNING id, "placedAt" AS placed_at, "paymentStatus" AS payment_status,
                  "customerId" AS customer_id
        "#,
    )
    .bind(customer.id)
    .fetch_one(transaction.as_mut())
    .await?;

    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            INSERT INTO "OrderItem" ("orderId", "productId", quantity, "unitPrice")
            VALUES ($1, $2, $3, $4)
            RETURNING id, "orderId" AS order_id, "productId" AS product_id,
                      quantity, "unitPrice" AS unit_price
            "#,
        )
        .bind(order.id)
        .bind(line.product_id)
        .bind(line.quantity)
        .bind(line.price)
        .fetch_one(transaction.as_mut())
        .await?;
        items.push(item);
    }

    // the CASCADE key takes the cart's lines with it
    sqlx::query(
        r#"
        DELETE FROM "Cart" WHERE id = $1
        "#,
    )
    .bind(cart_id)
    .execute(transaction.as_mut())
    .await?;

    transaction.commit().await.map_err(|e| {
        tracing::error!(error=?e, "error committing order placement");
        StoreDbError::from(e)
    })?;

    Ok(OrderWithItems::new(order, items))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CART_ID: &str = "11111111-1111-1111-1111-111111111111";

    async fn seed_cart_lines(pool: &Pool<Postgres>, cart_id: Uuid) {
        sqlx::query(
            r#"
            INSERT INTO "CartItem" ("cartId", "productId", quantity)
            VALUES ($1, 1, 2), ($1, 2, 1)
            "#,
        )
        .bind(cart_id)
        .execute(pool)
        .await
        .unwrap();
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog", "carts")))]
    async fn test_place_order_snapshots_prices_and_deletes_cart(pool: Pool<Postgres>) {
        let cart_id = Uuid::parse_str(CART_ID).unwrap();
        seed_cart_lines(&pool, cart_id).await;

        let placed = place_order(&pool, "buyer-1", cart_id).await.unwrap();
        assert_eq!(placed.items.len(), 2);

        // a later price change must not touch the snapshotted unit prices
        sqlx::query(r#"UPDATE "Product" SET price = 99.99 WHERE id = 1"#)
            .execute(&pool)
            .await
            .unwrap();

        let unit_prices = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT "unitPrice" FROM "OrderItem"
            WHERE "orderId" = $1 ORDER BY "productId"
            "#,
        )
        .bind(placed.id)
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(unit_prices, vec![Decimal::new(1000, 2), Decimal::new(500, 2)]);

        let cart_count =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Cart" WHERE id = $1"#)
                .bind(cart_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(cart_count, 0);

        let line_count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM "CartItem" WHERE "cartId" = $1"#,
        )
        .bind(cart_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(line_count, 0);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog", "carts")))]
    async fn test_place_order_provisions_the_customer(pool: Pool<Postgres>) {
        let cart_id = Uuid::parse_str(CART_ID).unwrap();
        seed_cart_lines(&pool, cart_id).await;

        place_order(&pool, "first-time-buyer", cart_id).await.unwrap();

        let customer_count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM "Customer" WHERE "userId" = $1"#,
        )
        .bind("first-time-buyer")
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(customer_count, 1);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog", "carts")))]
    async fn test_place_order_empty_cart_is_rejected_and_rolled_back(pool: Pool<Postgres>) {
        let cart_id = Uuid::parse_str(CART_ID).unwrap();

        let err = place_order(&pool, "buyer-1", cart_id).await.unwrap_err();
        assert!(matches!(err, StoreDbError::InvalidArgument { .. }));

        let order_count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Order""#)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(order_count, 0);

        // the failed attempt must leave the cart in place
        let cart_count =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Cart" WHERE id = $1"#)
                .bind(cart_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(cart_count, 1);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("catalog")))]
    async fn test_place_order_missing_cart_is_not_found(pool: Pool<Postgres>) {
        let err = place_order(&pool, "buyer-1", Uuid::nil()).await.unwrap_err();
        assert!(matches!(err, StoreDbError::NotFound { entity: "cart" }));
    }
}

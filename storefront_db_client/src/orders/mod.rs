pub mod get_order;
pub mod get_orders;
pub mod place_order;

use std::collections::HashMap;

use models_storefront::order::{Order, OrderItem, OrderWithItems};
use sqlx::{Pool, Postgres};

use crate::Result;

const ORDER_COLUMNS: &str = r#"id, "placedAt" AS placed_at, "paymentStatus" AS payment_status, "customerId" AS customer_id"#;

/// Attaches order items to their orders with one query for the whole batch.
pub(crate) async fn attach_items(
    db: &Pool<Postgres>,
    orders: Vec<Order>,
) -> Result<Vec<OrderWithItems>> {
    let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();

    let items = sqlx::query_as::<_, OrderItem>(
        r#"
        SELECT id, "orderId" AS order_id, "productId" AS product_id,
               quantity, "unitPrice" AS unit_price
        FROM "OrderItem"
        WHERE "orderId" = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(&order_ids)
    .fetch_all(db)
    .await?;

    let mut by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
    for item in items {
        by_order.entry(item.order_id).or_default().push(item);
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let items = by_order.remove(&order.id).unwrap_or_default();
            OrderWithItems::new(order, items)
        })
        .collect())
}

use models_storefront::{order::Order, order::OrderWithItems, user::UserContext};
use sqlx::{Pool, Postgres};

use super::{ORDER_COLUMNS, attach_items};
use crate::{Result, StoreDbError, customers::get_or_create_customer::get_or_create_customer};

/// Fetches one order. A non-staff caller only sees their own orders; anyone
/// else's id answers not-found so order ids do not leak existence.
#[tracing::instrument(skip(db), fields(user_id = %user.user_id, is_staff = user.is_staff))]
pub async fn get_order(
    db: &Pool<Postgres>,
    user: &UserContext,
    order_id: i64,
) -> Result<OrderWithItems> {
    let order = sqlx::query_as::<_, Order>(&format!(
        r#"SELECT {ORDER_COLUMNS} FROM "Order" WHERE id = $1"#
    ))
    .bind(order_id)
    .fetch_optional(db)
    .await?
    .ok_or(StoreDbError::not_found("order"))?;

    if !user.is_staff {
        let customer = get_or_create_customer(db, &user.user_id).await?;
        if order.customer_id != customer.id {
            return Err(StoreDbError::not_found("order"));
        }
    }

    let mut orders = attach_items(db, vec![order]).await?;
    // attach_items preserves its input; one order in, one order out
    orders.pop().ok_or(StoreDbError::not_found("order"))
}

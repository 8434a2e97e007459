use models_storefront::{order::Order, order::OrderWithItems, user::UserContext};
use sqlx::{Pool, Postgres};

use super::{ORDER_COLUMNS, attach_items};
use crate::{Result, customers::get_or_create_customer::get_or_create_customer};

/// Lists orders visible to the caller: staff sees everything, anyone else
/// only the orders of the customer resolved from their identity (provisioning
/// the customer row on first access, as order placement does).
#[tracing::instrument(skip(db), fields(user_id = %user.user_id, is_staff = user.is_staff))]
pub async fn get_orders(db: &Pool<Postgres>, user: &UserContext) -> Result<Vec<OrderWithItems>> {
    let orders = if user.is_staff {
        sqlx::query_as::<_, Order>(&format!(
            r#"SELECT {ORDER_COLUMNS} FROM "Order" ORDER BY id"#
        ))
        .fetch_all(db)
        .await?
    } else {
        let customer = get_or_create_customer(db, &user.user_id).await?;
        sqlx::query_as::<_, Order>(&format!(
            r#"SELECT {ORDER_COLUMNS} FROM "Order" WHERE "customerId" = $1 ORDER BY id"#
        ))
        .bind(customer.id)
        .fetch_all(db)
        .await?
    };

    attach_items(db, orders).await
}

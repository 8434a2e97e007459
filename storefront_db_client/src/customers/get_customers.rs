use models_storefront::customer::Customer;
use sqlx::{Pool, Postgres};

use crate::Result;

/// Lists every customer. Staff-only at the API boundary.
#[tracing::instrument(skip(db))]
pub async fn get_customers(db: &Pool<Postgres>) -> Result<Vec<Customer>> {
    let customers = sqlx::query_as::<_, Customer>(
        r#"
        SELECT id, "userId" AS user_id, "firstName" AS first_name,
               "lastName" AS last_name, membership
        FROM "Customer"
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(customers)
}

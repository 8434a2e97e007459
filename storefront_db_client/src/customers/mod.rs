pub mod get_customers;
pub mod get_or_create_customer;
pub mod update_customer;

//! The sole responsibility of this crate is to expose the statically imported sql migrations for the storefront database.
//!
//! We explicitly do not want these migrations to exist as part of storefront_db_client crate because that crate is very heavy.
pub static STOREFRONT_DB_MIGRATIONS: sqlx::migrate::Migrator =
    sqlx::migrate!("../storefront_db_client/migrations");

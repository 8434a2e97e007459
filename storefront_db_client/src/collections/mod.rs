pub mod create_collection;
pub mod delete_collection;
pub mod get_collection;
pub mod get_collections;
pub mod update_collection;

// Adapters layer: concrete record stores and the database connection handle.

pub mod database;
pub mod file_store;
pub mod memory_store;
pub mod remote_store;

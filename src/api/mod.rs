pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;

pub use routes::{build_router, cors_layer, API_BASE_PATH};
pub use server::{shutdown_signal, ApiServer};

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServerConfig;

pub use adapters::database::Database;
pub use api::ApiServer;
pub use core::service::ProfessorService;
pub use utils::error::{Result, StatsError};

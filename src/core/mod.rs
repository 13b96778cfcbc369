pub mod service;
pub mod statistics;

pub use crate::domain::model::{EnrichedProfessorView, ProfessorRecord, StatisticsSummary};
pub use crate::domain::ports::{Clock, ProfessorStore};
pub use crate::utils::error::Result;

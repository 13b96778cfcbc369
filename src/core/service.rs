use crate::core::statistics::{compute_statistics, enrich_with_experience};
use crate::domain::model::{EnrichedProfessorView, ProfessorRecord, StatisticsSummary};
use crate::domain::ports::{Clock, ProfessorStore, SystemClock};
use crate::utils::error::Result;

/// Business operations over the professor collection.
///
/// Every call takes a fresh snapshot from the store; the current year is
/// sampled from the clock once per call.
pub struct ProfessorService<S: ProfessorStore> {
    store: S,
    clock: Box<dyn Clock>,
}

impl<S: ProfessorStore> ProfessorService<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }

    pub fn with_clock(store: S, clock: impl Clock + 'static) -> Self {
        Self {
            store,
            clock: Box::new(clock),
        }
    }

    pub async fn get_all_professors(&self) -> Result<Vec<ProfessorRecord>> {
        self.store.find_all().await
    }

    pub async fn count_professors(&self) -> Result<usize> {
        self.store.count().await
    }

    pub async fn get_statistics(&self) -> Result<StatisticsSummary> {
        let professors = self.store.find_all().await?;
        let current_year = self.clock.current_year();
        tracing::debug!(
            "Computing statistics over {} professors (year {})",
            professors.len(),
            current_year
        );
        Ok(compute_statistics(&professors, current_year))
    }

    pub async fn get_professors_with_experience(&self) -> Result<Vec<EnrichedProfessorView>> {
        let professors = self.store.find_all().await?;
        Ok(enrich_with_experience(&professors, self.clock.current_year()))
    }
}

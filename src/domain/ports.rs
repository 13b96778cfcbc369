use crate::domain::model::ProfessorRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Datelike;

/// Source of professor records.
#[async_trait]
pub trait ProfessorStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ProfessorRecord>>;
    async fn count(&self) -> Result<usize>;
}

#[async_trait]
impl<T: ProfessorStore + ?Sized> ProfessorStore for std::sync::Arc<T> {
    async fn find_all(&self) -> Result<Vec<ProfessorRecord>> {
        (**self).find_all().await
    }

    async fn count(&self) -> Result<usize> {
        (**self).count().await
    }
}

pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// 使用本地時區的實際年份
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

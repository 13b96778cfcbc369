use crate::domain::model::{at_index, normalize_records, ProfessorRecord};
use crate::domain::ports::ProfessorStore;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<Vec<ProfessorRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ProfessorRecord>) -> Result<Self> {
        Ok(Self {
            records: Arc::new(RwLock::new(normalize_records(records)?)),
        })
    }

    pub async fn insert(&self, record: ProfessorRecord) -> Result<()> {
        let mut records = self.records.write().await;
        let record = record.trimmed();
        record.validate().map_err(|e| at_index(records.len(), e))?;
        records.push(record);
        Ok(())
    }
}

#[async_trait]
impl ProfessorStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<ProfessorRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::StatsError;

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let store = InMemoryStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        store
            .insert(ProfessorRecord::new("Ada", "CS", 90000.0, 2010, 3).unwrap())
            .await
            .unwrap();
        store
            .insert(ProfessorRecord::new("Emmy", "Math", 95000.0, 2008, 2).unwrap())
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Ada");
        assert_eq!(all[1].name, "Emmy");
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_record() {
        let store = InMemoryStore::new();
        let bad = ProfessorRecord {
            id: None,
            name: "Ada".to_string(),
            department: "CS".to_string(),
            salary: -5.0,
            hire_year: 2010,
            courses_count: 1,
        };

        match store.insert(bad).await {
            Err(StatsError::MalformedRecord { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.starts_with("salary"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }
}

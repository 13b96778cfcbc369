use crate::domain::model::{normalize_records, ProfessorRecord};
use crate::domain::ports::ProfessorStore;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted file layouts: a bare array, or `{"data": [...]}` as served by the API.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RecordDocument {
    List(Vec<ProfessorRecord>),
    Envelope { data: Vec<ProfessorRecord> },
}

impl RecordDocument {
    pub(crate) fn into_records(self) -> Vec<ProfessorRecord> {
        match self {
            Self::List(records) | Self::Envelope { data: records } => records,
        }
    }
}

/// JSON file holding the professor collection; re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<ProfessorRecord>> {
        tracing::debug!("Reading professors from {}", self.path.display());
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            StatsError::storage(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        // 格式錯誤視為資料問題，不是儲存問題
        let document: RecordDocument = serde_json::from_slice(&data)?;
        normalize_records(document.into_records())
    }
}

#[async_trait]
impl ProfessorStore for JsonFileStore {
    async fn find_all(&self) -> Result<Vec<ProfessorRecord>> {
        self.load().await
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.load().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_plain_array() {
        let file = write_temp(
            r#"[
                {"_id": "1", "name": "Ada", "department": "CS", "salary": 90000, "hireYear": 2010, "coursesCount": 3},
                {"name": "Emmy", "department": "Math", "salary": 95000.5, "hireYear": 2008, "coursesCount": 0}
            ]"#,
        );
        let store = JsonFileStore::new(file.path());

        let records = store.find_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_deref(), Some("1"));
        assert_eq!(records[1].salary, 95000.5);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_reads_envelope() {
        let file = write_temp(
            r#"{"success": true, "count": 1, "data": [
                {"name": "Ada", "department": "CS", "salary": 90000, "hireYear": 2010, "coursesCount": 3}
            ]}"#,
        );
        let store = JsonFileStore::new(file.path());
        assert_eq!(store.find_all().await.unwrap()[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_missing_file_is_storage_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        assert!(matches!(
            store.find_all().await,
            Err(StatsError::StorageError { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_record_fails_whole_fetch() {
        let file = write_temp(
            r#"[
                {"name": "Ada", "department": "CS", "salary": 90000, "hireYear": 2010, "coursesCount": 3},
                {"name": "", "department": "CS", "salary": 1, "hireYear": 2010, "coursesCount": 3}
            ]"#,
        );
        let store = JsonFileStore::new(file.path());

        assert!(matches!(
            store.find_all().await,
            Err(StatsError::MalformedRecord { index: 1, .. })
        ));
    }

    #[tokio::test]
    async fn test_padded_values_group_together() {
        let file = write_temp(
            r#"[
                {"name": "Ada", "department": " CS", "salary": 90000, "hireYear": 2010, "coursesCount": 3},
                {"name": "Grace", "department": "CS", "salary": 70000, "hireYear": 2015, "coursesCount": 2}
            ]"#,
        );
        let store = JsonFileStore::new(file.path());

        let records = store.find_all().await.unwrap();
        let stats = crate::core::statistics::compute_statistics(&records, 2024);
        assert_eq!(stats.department_stats.len(), 1);
        assert_eq!(stats.department_stats[0].department, "CS");
        assert_eq!(stats.department_stats[0].total_professors, 2);
    }

    #[tokio::test]
    async fn test_out_of_range_hire_year_is_malformed() {
        let file = write_temp(
            r#"[{"name": "Ada", "department": "CS", "salary": 1, "hireYear": -2147483648, "coursesCount": 3}]"#,
        );
        let store = JsonFileStore::new(file.path());

        match store.find_all().await {
            Err(StatsError::MalformedRecord { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.starts_with("hireYear"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_serialization_error() {
        let file = write_temp(r#"[{"name": "Ada", "department": "CS", "salary": 90000}]"#);
        let store = JsonFileStore::new(file.path());

        assert!(matches!(
            store.find_all().await,
            Err(StatsError::SerializationError(_))
        ));
    }
}

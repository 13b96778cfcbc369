//! Connection handle for the record store.
//!
//! `Database::connect` picks a backend from the URI:
//!
//! - `memory://` starts with an empty in-process collection
//! - `file://<path>` or a bare path reads a JSON file
//! - `http://` / `https://` fetches from a remote endpoint
//!
//! The handle is owned by whoever connected it and released with
//! [`Database::disconnect`]; any later fetch fails with a storage error.

use crate::adapters::file_store::JsonFileStore;
use crate::adapters::memory_store::InMemoryStore;
use crate::adapters::remote_store::RemoteStore;
use crate::domain::model::ProfessorRecord;
use crate::domain::ports::ProfessorStore;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
enum Backend {
    Memory(InMemoryStore),
    File(JsonFileStore),
    Remote(RemoteStore),
}

#[derive(Debug)]
pub struct Database {
    uri: String,
    backend: Backend,
    connected: AtomicBool,
}

impl Database {
    pub async fn connect(uri: &str) -> Result<Self> {
        validate_non_empty_string("database.uri", uri)?;

        let backend = if uri.starts_with("memory:") {
            Backend::Memory(InMemoryStore::new())
        } else if uri.starts_with("http://") || uri.starts_with("https://") {
            validate_url("database.uri", uri)?;
            Backend::Remote(RemoteStore::new(uri)?)
        } else {
            let path = uri.strip_prefix("file://").unwrap_or(uri);
            validate_path("database.uri", path)?;
            if tokio::fs::metadata(path).await.is_err() {
                tracing::error!("❌ Record file not found: {}", path);
                return Err(StatsError::storage(format!("record file {} does not exist", path)));
            }
            Backend::File(JsonFileStore::new(path))
        };

        tracing::info!("✅ Connected to record store");
        tracing::info!("📦 Database: {}", Self::describe(&backend));

        Ok(Self {
            uri: uri.to_string(),
            backend,
            connected: AtomicBool::new(true),
        })
    }

    /// Wraps an existing in-memory collection, mostly for tests and demos.
    pub fn in_memory(records: Vec<ProfessorRecord>) -> Result<Self> {
        Ok(Self {
            uri: "memory://".to_string(),
            backend: Backend::Memory(InMemoryStore::from_records(records)?),
            connected: AtomicBool::new(true),
        })
    }

    fn describe(backend: &Backend) -> String {
        match backend {
            Backend::Memory(_) => "in-memory".to_string(),
            Backend::File(store) => format!("file {}", store.path().display()),
            Backend::Remote(store) => format!("remote {}", store.endpoint()),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// In-memory backend, if that is what this handle is connected to.
    pub fn memory_store(&self) -> Option<&InMemoryStore> {
        match &self.backend {
            Backend::Memory(store) => Some(store),
            _ => None,
        }
    }

    pub async fn disconnect(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            tracing::info!("🔌 Disconnected from record store");
        }
    }

    fn store(&self) -> Result<&dyn ProfessorStore> {
        if !self.is_connected() {
            return Err(StatsError::storage("database connection is closed"));
        }
        let store: &dyn ProfessorStore = match &self.backend {
            Backend::Memory(store) => store,
            Backend::File(store) => store,
            Backend::Remote(store) => store,
        };
        Ok(store)
    }
}

#[async_trait]
impl ProfessorStore for Database {
    async fn find_all(&self) -> Result<Vec<ProfessorRecord>> {
        self.store()?.find_all().await.inspect_err(|e| {
            tracing::error!("❌ Database find_all failed: {}", e);
        })
    }

    async fn count(&self) -> Result<usize> {
        self.store()?.count().await.inspect_err(|e| {
            tracing::error!("❌ Database count failed: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_connect_memory() {
        let db = Database::connect("memory://").await.unwrap();
        assert!(db.is_connected());
        assert_eq!(db.count().await.unwrap(), 0);

        db.memory_store()
            .unwrap()
            .insert(ProfessorRecord::new("Ada", "CS", 90000.0, 2010, 3).unwrap())
            .await
            .unwrap();
        assert_eq!(db.find_all().await.unwrap().len(), 1);

        db.disconnect().await;
        assert!(!db.is_connected());
        assert!(matches!(
            db.find_all().await,
            Err(StatsError::StorageError { .. })
        ));
    }

    #[tokio::test]
    async fn test_connect_file_uri_and_bare_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"name": "Ada", "department": "CS", "salary": 90000, "hireYear": 2010, "coursesCount": 3}]"#,
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let db = Database::connect(&format!("file://{}", path)).await.unwrap();
        assert_eq!(db.count().await.unwrap(), 1);
        assert!(db.memory_store().is_none());

        let db = Database::connect(&path).await.unwrap();
        assert_eq!(db.find_all().await.unwrap()[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_connect_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");

        let result = Database::connect(missing.to_str().unwrap()).await;
        assert!(matches!(result, Err(StatsError::StorageError { .. })));
    }

    #[tokio::test]
    async fn test_connect_rejects_empty_uri() {
        assert!(Database::connect("  ").await.is_err());
    }

    #[tokio::test]
    async fn test_remote_uri_selects_remote_backend() {
        let db = Database::connect("https://records.example.com/api/professors")
            .await
            .unwrap();
        assert_eq!(db.uri(), "https://records.example.com/api/professors");
        assert!(db.memory_store().is_none());
        assert_eq!(
            Database::describe(&db.backend),
            "remote https://records.example.com/api/professors"
        );
    }
}

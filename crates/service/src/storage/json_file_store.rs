use std::path::PathBuf;

use tokio::fs;

use models::score::ScoreRecord;

use crate::errors::ServiceError;
use crate::storage::ScoreStore;

/// JSON file-backed score store.
///
/// Persists the leaderboard as a single JSON array and keeps no state between
/// requests: every load rereads the file, every save rewrites it whole.
#[derive(Clone)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Build a store over the given path, creating the parent directory if
    /// needed. The file itself is created lazily on first save.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
        }
        Ok(Self { file_path })
    }
}

#[async_trait::async_trait]
impl ScoreStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<ScoreRecord>, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Storage(format!("malformed score file: {e}"))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ServiceError::Storage(e.to_string())),
        }
    }

    async fn save(&self, records: &[ScoreRecord]) -> Result<(), ServiceError> {
        let data =
            serde_json::to_vec(records).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

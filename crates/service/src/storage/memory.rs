use tokio::sync::RwLock;

use models::score::ScoreRecord;

use crate::errors::ServiceError;
use crate::storage::ScoreStore;

/// In-memory score store, used as a test double for the file-backed store.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ScoreRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial sequence, bypassing the ranking service.
    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        Self { records: RwLock::new(records) }
    }
}

#[async_trait::async_trait]
impl ScoreStore for MemoryStore {
    async fn load(&self) -> Result<Vec<ScoreRecord>, ServiceError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[ScoreRecord]) -> Result<(), ServiceError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}

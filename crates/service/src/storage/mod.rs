pub mod json_file_store;
pub mod memory;

use models::score::ScoreRecord;

use crate::errors::ServiceError;

/// Persistence seam for the leaderboard.
///
/// The whole leaderboard is loaded and saved as one unit; implementations are
/// injected into the ranking service so tests can swap in [`memory::MemoryStore`].
#[async_trait::async_trait]
pub trait ScoreStore: Send + Sync {
    /// Read the entire persisted sequence. A missing backing store yields an
    /// empty list, not an error.
    async fn load(&self) -> Result<Vec<ScoreRecord>, ServiceError>;

    /// Replace the persisted sequence entirely. Not atomic; a crash mid-write
    /// can leave a truncated store behind.
    async fn save(&self, records: &[ScoreRecord]) -> Result<(), ServiceError>;
}

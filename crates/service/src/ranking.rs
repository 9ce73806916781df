use std::sync::Arc;

use tracing::debug;

use models::score::{ScoreRecord, ScoreSubmission};

use crate::errors::ServiceError;
use crate::storage::ScoreStore;

/// Leaderboard capacity; everything past the top 10 is dropped on write.
pub const MAX_ENTRIES: usize = 10;

/// Ranking operations over an injected [`ScoreStore`].
///
/// Both operations are single-shot transforms with no state of their own; the
/// store is the only source of truth. Submit performs a plain
/// read-modify-write with no locking, matching the single-process deployment
/// model.
#[derive(Clone)]
pub struct RankingService {
    store: Arc<dyn ScoreStore>,
}

impl RankingService {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }

    /// Record a submission: validate, default missing fields, then rewrite
    /// the stored top 10.
    ///
    /// Ties on `score` keep submission order (stable sort), so an earlier
    /// entry ranks above a later one with the same score.
    pub async fn submit(&self, submission: ScoreSubmission) -> Result<(), ServiceError> {
        submission.validate()?;
        let record = submission.into_record();

        let mut records = self.store.load().await?;
        records.push(record);
        records.sort_by(|a, b| b.score.total_cmp(&a.score));
        records.truncate(MAX_ENTRIES);
        self.store.save(&records).await?;

        debug!(entries = records.len(), "score submitted");
        Ok(())
    }

    /// Return the stored ranking verbatim.
    pub async fn list(&self) -> Result<Vec<ScoreRecord>, ServiceError> {
        self.store.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use models::score::DEFAULT_NAME;

    fn service() -> RankingService {
        RankingService::new(Arc::new(MemoryStore::new()))
    }

    fn seeded(records: Vec<ScoreRecord>) -> RankingService {
        RankingService::new(Arc::new(MemoryStore::with_records(records)))
    }

    fn rec(name: &str, score: f64) -> ScoreRecord {
        ScoreRecord { name: name.into(), score }
    }

    fn sub(name: &str, score: f64) -> ScoreSubmission {
        ScoreSubmission { name: Some(name.into()), score: Some(score) }
    }

    /// Ten entries scored 100, 90, ..., 10.
    fn full_board() -> Vec<ScoreRecord> {
        (1..=10).rev().map(|i| rec(&format!("p{i}"), (i * 10) as f64)).collect()
    }

    #[tokio::test]
    async fn first_submission_lands_alone() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.submit(sub("A", 10.0)).await?;
        assert_eq!(svc.list().await?, vec![rec("A", 10.0)]);
        Ok(())
    }

    #[tokio::test]
    async fn board_stays_sorted_and_capped() -> Result<(), anyhow::Error> {
        let svc = service();
        for i in 0..15 {
            svc.submit(sub(&format!("p{i}"), i as f64)).await?;
        }
        let board = svc.list().await?;
        assert_eq!(board.len(), MAX_ENTRIES);
        assert!(board.windows(2).all(|w| w[0].score >= w[1].score));
        // lowest five submissions fell off
        assert_eq!(board.last().map(|r| r.score), Some(5.0));
        Ok(())
    }

    #[tokio::test]
    async fn low_score_on_full_board_is_dropped() -> Result<(), anyhow::Error> {
        let svc = seeded(full_board());
        svc.submit(sub("X", 5.0)).await?;
        assert_eq!(svc.list().await?, full_board());
        Ok(())
    }

    #[tokio::test]
    async fn mid_score_displaces_the_bottom_entry() -> Result<(), anyhow::Error> {
        let svc = seeded(full_board());
        svc.submit(sub("X", 55.0)).await?;
        let board = svc.list().await?;
        assert_eq!(board.len(), MAX_ENTRIES);
        assert_eq!(board[5], rec("X", 55.0));
        assert!(!board.iter().any(|r| r.score == 10.0));
        assert!(board.windows(2).all(|w| w[0].score >= w[1].score));
        Ok(())
    }

    #[tokio::test]
    async fn ties_keep_submission_order() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.submit(sub("first", 7.0)).await?;
        svc.submit(sub("second", 7.0)).await?;
        let board = svc.list().await?;
        assert_eq!(board[0].name, "first");
        assert_eq!(board[1].name, "second");
        Ok(())
    }

    #[tokio::test]
    async fn list_is_idempotent() -> Result<(), anyhow::Error> {
        let svc = seeded(full_board());
        assert_eq!(svc.list().await?, svc.list().await?);
        Ok(())
    }

    #[tokio::test]
    async fn empty_submission_defaults_both_fields() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.submit(ScoreSubmission::default()).await?;
        assert_eq!(svc.list().await?, vec![rec(DEFAULT_NAME, 0.0)]);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_submission_leaves_store_untouched() -> Result<(), anyhow::Error> {
        let svc = seeded(full_board());
        let bad = ScoreSubmission { name: None, score: Some(f64::NAN) };
        let err = svc.submit(bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert_eq!(svc.list().await?, full_board());
        Ok(())
    }
}

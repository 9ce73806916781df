use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Name recorded when a submission omits one.
pub const DEFAULT_NAME: &str = "anonymous";

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// One leaderboard entry. Serializes as `{"name": ..., "score": ...}`, the
/// same shape the score file has always used, so existing files stay readable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: f64,
}

/// Request body for score submission. Both fields are optional; the defaults
/// (`"anonymous"`, `0`) are applied in [`ScoreSubmission::into_record`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScoreSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl ScoreSubmission {
    /// Reject input the leaderboard cannot meaningfully rank or store.
    /// A missing field is fine (it defaults); a present-but-bad one is not.
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.name {
            if name.chars().count() > MAX_NAME_LEN {
                return Err(ModelError::Validation(format!(
                    "name must be at most {} characters",
                    MAX_NAME_LEN
                )));
            }
        }
        if let Some(score) = self.score {
            if !score.is_finite() {
                return Err(ModelError::Validation("score must be a finite number".into()));
            }
        }
        Ok(())
    }

    /// Apply documented defaults and produce the record to store.
    pub fn into_record(self) -> ScoreRecord {
        ScoreRecord {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            score: self.score.unwrap_or(0.0),
        }
    }
}

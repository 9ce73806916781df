//! Service layer providing the leaderboard operations on top of models.
//! - Separates ranking logic from storage access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod ranking;
pub mod runtime;
pub mod storage;

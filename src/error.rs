//! Engine error taxonomy.
//!
//! All failures are synchronous return values; the engine never retries.
//! Recovery happens at the caller, which may re-fetch corrected state
//! and call again.

use chrono::{DateTime, Utc};

/// Convenience alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A state entering the engine violates its structural invariants.
    /// Rejected immediately so corrupted data cannot propagate.
    #[error("invalid mastery state: {0}")]
    InvalidState(String),

    /// `now` precedes the recorded last review. Never clamped; clamping
    /// in earlier per-type implementations masked integration bugs.
    #[error("clock regression: now {now} precedes last review {last_reviewed_at}")]
    ClockRegression {
        last_reviewed_at: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    /// Scheduling policy queried with a level outside [0, 5]. Caller
    /// error, not a runtime fallback.
    #[error("mastery level {0} outside the scheduling table")]
    InvalidLevel(i64),
}

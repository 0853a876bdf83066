//! Common Types and Constants
//!
//! Shared data structures used across the engine modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

// ==================== Constants ====================

/// Lowest mastery level (new/unseen item)
pub const MIN_MASTERY_LEVEL: i64 = 0;

/// Highest mastery level (mastered item)
pub const MAX_MASTERY_LEVEL: i64 = 5;

// ==================== Recall Outcome ====================

/// Result of a single review attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallOutcome {
    Correct,
    Incorrect,
}

// ==================== Mastery State ====================

/// Per-item learning state, owned by one (learner, item) pair.
///
/// Produced immutably by the review engine; callers load it from their
/// store, hand it to [`crate::review::apply_outcome`], and persist the
/// returned value. The annotation fields (`is_favorite`, `notes`,
/// `tags`) are carried through every transition unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryState {
    /// Opaque item identifier, unique within its owning collection
    pub item_id: String,
    /// Mastery level in [0, 5]; 0 = unseen, 5 = mastered
    pub mastery_level: i64,
    /// Total completed reviews
    pub review_count: i64,
    /// Reviews answered correctly
    pub correct_count: i64,
    /// Reviews answered incorrectly
    pub incorrect_count: i64,
    /// Time of the last completed review; `None` before the first review
    pub last_reviewed_at: Option<DateTime<Utc>>,
    /// Next scheduled review; equals creation time for a new item
    pub next_review_at: DateTime<Utc>,
    /// User annotation, not touched by the engine
    #[serde(default)]
    pub is_favorite: bool,
    /// User annotation, not touched by the engine
    #[serde(default)]
    pub notes: Option<String>,
    /// User annotations, not touched by the engine
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MasteryState {
    /// Zero state for an item the learner just added: level 0, no
    /// reviews, due immediately.
    pub fn new_item(item_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            item_id: item_id.into(),
            mastery_level: MIN_MASTERY_LEVEL,
            review_count: 0,
            correct_count: 0,
            incorrect_count: 0,
            last_reviewed_at: None,
            next_review_at: now,
            is_favorite: false,
            notes: None,
            tags: Vec::new(),
        }
    }

    /// Check every structural invariant, naming the violated field.
    ///
    /// Called on every state entering the engine so corrupted data is
    /// rejected instead of propagated.
    pub fn validate(&self) -> EngineResult<()> {
        if self.mastery_level < MIN_MASTERY_LEVEL || self.mastery_level > MAX_MASTERY_LEVEL {
            return Err(EngineError::InvalidState(format!(
                "masteryLevel {} outside [{MIN_MASTERY_LEVEL}, {MAX_MASTERY_LEVEL}]",
                self.mastery_level
            )));
        }
        if self.review_count < 0 || self.correct_count < 0 || self.incorrect_count < 0 {
            return Err(EngineError::InvalidState(format!(
                "negative counter (reviews {}, correct {}, incorrect {})",
                self.review_count, self.correct_count, self.incorrect_count
            )));
        }
        if self.correct_count + self.incorrect_count != self.review_count {
            return Err(EngineError::InvalidState(format!(
                "correctCount {} + incorrectCount {} != reviewCount {}",
                self.correct_count, self.incorrect_count, self.review_count
            )));
        }
        if let Some(last) = self.last_reviewed_at {
            if self.next_review_at < last {
                return Err(EngineError::InvalidState(format!(
                    "nextReviewAt {} earlier than lastReviewedAt {}",
                    self.next_review_at, last
                )));
            }
        }
        Ok(())
    }

    /// Whether the item is scheduled for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }

    /// Whether the item has reached the top mastery level.
    pub fn is_mastered(&self) -> bool {
        self.mastery_level == MAX_MASTERY_LEVEL
    }
}

// ==================== Tests ====================

//! Review engine: applies a recall outcome to a mastery state.
//!
//! Free pure functions over an immutable state record. No I/O, no
//! hidden state; callers own loading and persisting. Applying the same
//! outcome twice to the same pre-state means two separate reviews and
//! yields two different states, so callers must submit each real-world
//! recall event exactly once.

use chrono::{DateTime, Utc};

use crate::error::{EngineError, EngineResult};
use crate::schedule::review_interval;
use crate::types::{MasteryState, RecallOutcome, MAX_MASTERY_LEVEL, MIN_MASTERY_LEVEL};

/// Apply a single recall outcome at `now`, producing the successor state.
///
/// `Correct` raises the mastery level (capped at 5), `Incorrect` lowers
/// it (floored at 0). The next review is scheduled from `now` against
/// the interval of the *new* level, so a failed answer shortens the
/// wait. The review counters advance by exactly one and the annotation
/// fields pass through untouched.
///
/// Fails on a malformed `state` or on a `now` earlier than
/// `last_reviewed_at`; a clock regression is surfaced, never clamped.
pub fn apply_outcome(
    state: &MasteryState,
    outcome: RecallOutcome,
    now: DateTime<Utc>,
) -> EngineResult<MasteryState> {
    state.validate()?;
    if let Some(last) = state.last_reviewed_at {
        if now < last {
            return Err(EngineError::ClockRegression {
                last_reviewed_at: last,
                now,
            });
        }
    }

    let (mastery_level, correct_count, incorrect_count) = match outcome {
        RecallOutcome::Correct => (
            (state.mastery_level + 1).min(MAX_MASTERY_LEVEL),
            state.correct_count + 1,
            state.incorrect_count,
        ),
        RecallOutcome::Incorrect => (
            (state.mastery_level - 1).max(MIN_MASTERY_LEVEL),
            state.correct_count,
            state.incorrect_count + 1,
        ),
    };

    // Interval is computed after the level transition, never before.
    let interval = review_interval(mastery_level)?;

    tracing::trace!(
        item_id = %state.item_id,
        ?outcome,
        from_level = state.mastery_level,
        to_level = mastery_level,
        "applied recall outcome"
    );

    Ok(MasteryState {
        item_id: state.item_id.clone(),
        mastery_level,
        review_count: state.review_count + 1,
        correct_count,
        incorrect_count,
        last_reviewed_at: Some(now),
        next_review_at: now + interval,
        is_favorite: state.is_favorite,
        notes: state.notes.clone(),
        tags: state.tags.clone(),
    })
}

/// State for an item the learner just added: level 0, zero counters,
/// due immediately at `now`.
pub fn new_item_state(item_id: impl Into<String>, now: DateTime<Utc>) -> MasteryState {
    MasteryState::new_item(item_id, now)
}

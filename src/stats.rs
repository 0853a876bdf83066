//! Read-only aggregate statistics over a mastery-state collection.
//!
//! Feeds progress dashboards; never mutates the states it reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{MasteryState, MAX_MASTERY_LEVEL};

/// Snapshot of a collection's learning progress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    /// Total items in the collection
    pub total_items: usize,
    /// Item count per mastery level, index = level
    pub level_counts: [usize; (MAX_MASTERY_LEVEL + 1) as usize],
    /// Items at the top mastery level
    pub mastered_items: usize,
    /// Items never reviewed
    pub new_items: usize,
    /// Items due at the reference time
    pub due_items: usize,
    /// Favorited items
    pub favorite_items: usize,
    /// Total completed reviews across the collection
    pub total_reviews: i64,
    /// Total correct answers across the collection
    pub total_correct: i64,
    /// Correct answers over total reviews; 0.0 when nothing reviewed yet
    pub accuracy_rate: f64,
    /// Mean mastery level; 0.0 for an empty collection
    pub avg_mastery_level: f64,
}

/// Aggregate a collection at the reference time `now`.
///
/// Skips nothing and validates nothing: statistics are descriptive, so
/// an out-of-range level simply falls outside `level_counts`.
pub fn collection_stats(states: &[MasteryState], now: DateTime<Utc>) -> CollectionStats {
    let mut stats = CollectionStats {
        total_items: states.len(),
        ..CollectionStats::default()
    };

    let mut level_sum = 0i64;
    for state in states {
        if let Ok(idx) = usize::try_from(state.mastery_level) {
            if let Some(slot) = stats.level_counts.get_mut(idx) {
                *slot += 1;
            }
        }
        if state.is_mastered() {
            stats.mastered_items += 1;
        }
        if state.last_reviewed_at.is_none() {
            stats.new_items += 1;
        }
        if state.is_due(now) {
            stats.due_items += 1;
        }
        if state.is_favorite {
            stats.favorite_items += 1;
        }
        stats.total_reviews += state.review_count;
        stats.total_correct += state.correct_count;
        level_sum += state.mastery_level;
    }

    if stats.total_reviews > 0 {
        stats.accuracy_rate = stats.total_correct as f64 / stats.total_reviews as f64;
    }
    if !states.is_empty() {
        stats.avg_mastery_level = level_sum as f64 / states.len() as f64;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::{apply_outcome, new_item_state};
    use crate::types::RecallOutcome;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_collection() {
        let stats = collection_stats(&[], t0());
        assert_eq!(stats, CollectionStats::default());
    }

    #[test]
    fn test_counts_and_rates() {
        let mut a = new_item_state("a", t0());
        a = apply_outcome(&a, RecallOutcome::Correct, t0()).unwrap();
        a = apply_outcome(&a, RecallOutcome::Correct, t0() + Duration::days(1)).unwrap();

        let mut b = new_item_state("b", t0());
        b = apply_outcome(&b, RecallOutcome::Incorrect, t0()).unwrap();
        b.is_favorite = true;

        let c = new_item_state("c", t0());

        let now = t0() + Duration::days(1);
        let stats = collection_stats(&[a, b, c], now);

        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.new_items, 1);
        assert_eq!(stats.favorite_items, 1);
        assert_eq!(stats.mastered_items, 0);
        assert_eq!(stats.level_counts[0], 2); // b dropped to floor, c unseen
        assert_eq!(stats.level_counts[2], 1);
        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.total_correct, 2);
        assert!((stats.accuracy_rate - 2.0 / 3.0).abs() < 1e-12);
        assert!((stats.avg_mastery_level - 2.0 / 3.0).abs() < 1e-12);
        // b and c are due; a was rescheduled 3 days out
        assert_eq!(stats.due_items, 2);
    }

    #[test]
    fn test_mastered_items_counted() {
        let mut state = new_item_state("a", t0());
        let mut now = t0();
        for _ in 0..5 {
            now = now + Duration::days(1);
            state = apply_outcome(&state, RecallOutcome::Correct, now).unwrap();
        }
        let stats = collection_stats(std::slice::from_ref(&state), now);
        assert_eq!(stats.mastered_items, 1);
        assert_eq!(stats.level_counts[5], 1);
    }
}

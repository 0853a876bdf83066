//! Due selection: the ordered subset of a collection ready for review.

use chrono::{DateTime, Utc};

use crate::types::MasteryState;

/// References to the due states in a collection, fully ordered.
///
/// An item is due iff `next_review_at <= now`. Ordering is oldest-due
/// first, then ascending mastery level so weaker items surface first
/// among ties, then item id as the final tie-break. The result is
/// recomputed fresh from the input on every call; there is no cursor.
pub fn due_states<'a>(states: &'a [MasteryState], now: DateTime<Utc>) -> Vec<&'a MasteryState> {
    let mut due: Vec<&MasteryState> = states.iter().filter(|s| s.is_due(now)).collect();
    due.sort_by(|a, b| {
        a.next_review_at
            .cmp(&b.next_review_at)
            .then(a.mastery_level.cmp(&b.mastery_level))
            .then_with(|| a.item_id.cmp(&b.item_id))
    });

    tracing::debug!(total = states.len(), due = due.len(), "selected due items");
    due
}

/// Item ids due for review at `now`, in session order.
pub fn due_items(states: &[MasteryState], now: DateTime<Utc>) -> Vec<String> {
    due_states(states, now)
        .into_iter()
        .map(|s| s.item_id.clone())
        .collect()
}

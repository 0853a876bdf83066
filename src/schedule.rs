//! Scheduling policy: mastery level -> review interval.
//!
//! Fixed discrete table, ascending with level. Deliberately not an
//! SM-2/Anki curve with ease factors; the product ships one shared
//! table across all learning-item collections.

use chrono::Duration;

use crate::error::{EngineError, EngineResult};
use crate::types::{MAX_MASTERY_LEVEL, MIN_MASTERY_LEVEL};

/// Interval in whole days for levels 0 through 5
const INTERVAL_DAYS: [i64; 6] = [0, 1, 3, 7, 14, 30];

/// Waiting interval before an item at `mastery_level` is due again.
///
/// Level 0 maps to a zero interval (immediately due). A level outside
/// [0, 5] is a contract violation and returns
/// [`EngineError::InvalidLevel`] instead of a silent default.
pub fn review_interval(mastery_level: i64) -> EngineResult<Duration> {
    if mastery_level < MIN_MASTERY_LEVEL || mastery_level > MAX_MASTERY_LEVEL {
        return Err(EngineError::InvalidLevel(mastery_level));
    }
    Ok(Duration::days(INTERVAL_DAYS[mastery_level as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_table() {
        assert_eq!(review_interval(0).unwrap(), Duration::days(0));
        assert_eq!(review_interval(1).unwrap(), Duration::days(1));
        assert_eq!(review_interval(2).unwrap(), Duration::days(3));
        assert_eq!(review_interval(3).unwrap(), Duration::days(7));
        assert_eq!(review_interval(4).unwrap(), Duration::days(14));
        assert_eq!(review_interval(5).unwrap(), Duration::days(30));
    }

    #[test]
    fn test_intervals_ascend_with_level() {
        for level in 0..MAX_MASTERY_LEVEL {
            assert!(review_interval(level).unwrap() < review_interval(level + 1).unwrap());
        }
    }

    #[test]
    fn test_out_of_range_level_is_rejected() {
        assert_eq!(review_interval(-1), Err(EngineError::InvalidLevel(-1)));
        assert_eq!(review_interval(6), Err(EngineError::InvalidLevel(6)));
        assert_eq!(review_interval(42), Err(EngineError::InvalidLevel(42)));
    }
}

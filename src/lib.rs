//! # fuxi-engine - spaced-repetition mastery engine
//!
//! Pure Rust engine deciding how a learner's recall outcome changes an
//! item's mastery state and when that item is next due for review. One
//! shared implementation serves every learning-item collection
//! (vocabulary words, survival words, memory-palace entries) instead of
//! per-type copies of the same transition logic.
//!
//! Design goals:
//! - **Pure** - every operation is a function over its explicit
//!   arguments; no I/O, no hidden state, safe to call concurrently
//! - **Deterministic** - identical inputs always give identical
//!   results, including due-selection order
//! - **Strict** - malformed states, out-of-range levels and clock
//!   regressions are rejected, never silently repaired
//!
//! ## Module structure
//!
//! - [`types`] - [`MasteryState`] record, [`RecallOutcome`], level bounds
//! - [`schedule`] - fixed mastery-level -> interval table
//! - [`review`] - outcome application and new-item construction
//! - [`due`] - ordered due-subset selection
//! - [`stats`] - read-only collection statistics
//! - [`error`] - error taxonomy
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use fuxi_engine::{apply_outcome, due_items, new_item_state, RecallOutcome};
//!
//! let now = Utc::now();
//! let state = new_item_state("word-42", now);
//! let state = apply_outcome(&state, RecallOutcome::Correct, now)?;
//!
//! let session = due_items(std::slice::from_ref(&state), now);
//! assert!(session.is_empty()); // level 1 waits a day
//! # Ok::<(), fuxi_engine::EngineError>(())
//! ```

pub mod due;
pub mod error;
pub mod review;
pub mod schedule;
pub mod stats;
pub mod types;

pub use due::{due_items, due_states};
pub use error::{EngineError, EngineResult};
pub use review::{apply_outcome, new_item_state};
pub use schedule::review_interval;
pub use stats::{collection_stats, CollectionStats};
pub use types::{MasteryState, RecallOutcome, MAX_MASTERY_LEVEL, MIN_MASTERY_LEVEL};

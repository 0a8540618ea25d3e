//! # tagged-outcome
//!
//! Combinators for tagged outcome values: a discriminator (`success`,
//! `failure`, or any other label) plus zero, one, or many payload values.
//!
//! ```
//! use tagged_outcome::prelude::*;
//! use serde_json::json;
//!
//! let collected = collect_errors(vec![
//!     DynOutcome::success(json!(42)),
//!     DynOutcome::success(json!("abc")),
//! ]);
//! assert!(collected.is_success());
//! ```
//!
//! ## Modules
//!
//! - `outcome` - The tagged value model and the success / failure predicates
//! - `combinators` - Scalar combinators over one outcome
//! - `grouping` - Partition by tag and fold many outcomes into one
//! - `sequence` - Short-circuiting traversal and failure filtering
//! - `ext` - Iterator extension methods
//! - `error` - Errors raised when narrowing an outcome's shape
pub mod combinators;
pub mod error;
pub mod ext;
pub mod grouping;
pub mod outcome;
pub mod sequence;

pub use combinators::{
    map_failure, map_success, summarize, tap_if_bare_failure, tap_if_bare_success,
    tap_if_failure, tap_if_success, unwrap_or, Mapped, Settled,
};
pub use error::OutcomeError;
pub use ext::OutcomeIterExt;
pub use grouping::{
    collect_errors, group_by_tag, group_by_tags, Collected, CollectedErrors, Entry, Grouped,
    DEFAULT_REQUIRED_TAGS,
};
#[cfg(feature = "serde")]
pub use outcome::DynOutcome;
pub use outcome::{is_failure, is_success, Outcome, Payload, Tag};
pub use sequence::{map_while_success, reject_failures, Traversed};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{
        map_failure, map_success, summarize, tap_if_bare_success, tap_if_success, unwrap_or,
        Mapped, Settled,
    };
    pub use crate::ext::OutcomeIterExt;
    pub use crate::grouping::{collect_errors, group_by_tag, group_by_tags, Collected, Entry};
    #[cfg(feature = "serde")]
    pub use crate::outcome::DynOutcome;
    pub use crate::outcome::{is_failure, is_success, Outcome, Payload, Tag};
    pub use crate::sequence::{map_while_success, reject_failures, Traversed};
}

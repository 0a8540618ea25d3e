use crate::outcome::Tag;
use thiserror::Error;

/// Errors raised by the crate itself
///
/// Failure-tagged outcomes are data and never surface as an `OutcomeError`.
/// The only fallible step is narrowing an outcome to a shape a combinator
/// requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    #[error("expected a single-payload success or failure, got `{tag}` with {arity} value(s)")]
    Unsettled { tag: Tag, arity: usize },
}

impl OutcomeError {
    /// Create an unsettled-shape error for the given tag and payload arity
    pub fn unsettled(tag: Tag, arity: usize) -> Self {
        Self::Unsettled { tag, arity }
    }

    /// Tag of the outcome that was rejected
    pub fn tag(&self) -> &Tag {
        match self {
            Self::Unsettled { tag, .. } => tag,
        }
    }
}

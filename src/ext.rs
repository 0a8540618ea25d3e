//! Iterator extension methods over sequences of outcomes

use std::iter::{Filter, Map};

use crate::combinators::summarize;
use crate::grouping::{self, Collected, Grouped};
use crate::outcome::{Outcome, Tag};

/// Lazy adapter returned by [`OutcomeIterExt::reject_failures`]
pub type RejectFailures<I, T> = Filter<I, fn(&Outcome<T>) -> bool>;

/// Lazy adapter returned by [`OutcomeIterExt::summarized`]
pub type Summarized<I, T> = Map<I, fn(Outcome<T>) -> Outcome<T>>;

/// Grouping and filtering as iterator methods
///
/// ```
/// use tagged_outcome::{Outcome, OutcomeIterExt};
///
/// let outcomes = vec![Outcome::success(1), Outcome::failure(2), Outcome::success(3)];
/// let kept: Vec<_> = outcomes.clone().into_iter().reject_failures().collect();
/// assert_eq!(kept.len(), 2);
///
/// let grouped = outcomes.into_iter().group_by_tag();
/// assert_eq!(grouped.failures().len(), 1);
/// ```
pub trait OutcomeIterExt<T>: Iterator<Item = Outcome<T>> + Sized {
    fn group_by_tag(self) -> Grouped<T> {
        grouping::group_by_tag(self)
    }

    fn group_by_tags<R>(self, required: R) -> Grouped<T>
    where
        R: IntoIterator<Item = Tag>,
    {
        grouping::group_by_tags(self, required)
    }

    fn collect_errors(self) -> Outcome<Collected<T>> {
        grouping::collect_errors(self)
    }

    /// Drop failures without buffering the sequence
    fn reject_failures(self) -> RejectFailures<Self, T> {
        self.filter(not_failure as fn(&Outcome<T>) -> bool)
    }

    /// Summarize each outcome as it is pulled
    fn summarized(self) -> Summarized<Self, T> {
        self.map(summarize as fn(Outcome<T>) -> Outcome<T>)
    }
}

impl<T, I> OutcomeIterExt<T> for I where I: Iterator<Item = Outcome<T>> {}

fn not_failure<T>(outcome: &Outcome<T>) -> bool {
    !outcome.is_failure()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_failures_is_lazy() {
        let mut pulled = 0;
        let first = (0..)
            .map(|x| {
                pulled += 1;
                if x == 0 {
                    Outcome::failure(x)
                } else {
                    Outcome::success(x)
                }
            })
            .reject_failures()
            .next();

        assert_eq!(first, Some(Outcome::success(1)));
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_summarized() {
        let summarized: Vec<_> = vec![Outcome::success(1), Outcome::failure(2)]
            .into_iter()
            .summarized()
            .collect();
        assert_eq!(summarized, vec![Outcome::ok(), Outcome::failure(2)]);
    }

    #[test]
    fn test_group_and_collect_methods() {
        let grouped = vec![Outcome::success(1), Outcome::tagged("skipped", 2)]
            .into_iter()
            .group_by_tags([Tag::from("skipped")]);
        assert!(!grouped.contains_tag(&Tag::Failure));
        assert_eq!(grouped.total(), 2);

        let collected = vec![Outcome::success(1), Outcome::success(2)]
            .into_iter()
            .collect_errors();
        assert!(collected.is_success());
    }
}

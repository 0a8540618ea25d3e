//! Sequence combinators
//!
//! Ordered, single-pass traversals over collections of outcomes.

use crate::outcome::{Outcome, Payload};

/// Result of [`map_while_success`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Traversed<T> {
    /// Every element succeeded; payloads in input order
    Completed(Vec<T>),
    /// The outcome that stopped the traversal, exactly as `f` returned it
    Halted(Outcome<T>),
}

impl<T> Traversed<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Traversed::Completed(_))
    }

    pub fn into_result(self) -> Result<Vec<T>, Outcome<T>> {
        match self {
            Traversed::Completed(values) => Ok(values),
            Traversed::Halted(outcome) => Err(outcome),
        }
    }

    /// Flatten into a single outcome: `success(list)` or the halting outcome
    pub fn into_outcome(self) -> Outcome<T>
    where
        T: From<Vec<T>>,
    {
        match self {
            Traversed::Completed(values) => Outcome::success(T::from(values)),
            Traversed::Halted(outcome) => outcome,
        }
    }
}

impl<T> From<Traversed<T>> for Result<Vec<T>, Outcome<T>> {
    fn from(traversed: Traversed<T>) -> Self {
        traversed.into_result()
    }
}

/// Apply `f` to each item in order, stopping at the first non-success
///
/// A single-payload success appends its payload and moves on; a bare success
/// contributes nothing and moves on. Anything else (a failure, or an outcome
/// with some other tag) is returned as [`Traversed::Halted`] and `f` is not
/// called on the remaining items.
///
/// ```
/// use tagged_outcome::{map_while_success, Outcome, Traversed};
///
/// let halted = map_while_success(vec![1, 2, 3], |x| {
///     if x == 2 {
///         Outcome::failure(-x)
///     } else {
///         Outcome::success(x)
///     }
/// });
/// assert_eq!(halted, Traversed::Halted(Outcome::failure(-2)));
///
/// let doubled = map_while_success(vec![1, 2, 3], |x| Outcome::success(x * 2));
/// assert_eq!(doubled, Traversed::Completed(vec![2, 4, 6]));
/// ```
pub fn map_while_success<I, T, F>(items: I, mut f: F) -> Traversed<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Outcome<T>,
{
    let iter = items.into_iter();
    let mut accumulated = Vec::with_capacity(iter.size_hint().0);

    for (index, item) in iter.enumerate() {
        let outcome = f(item);
        if !outcome.is_success() {
            tracing::trace!(index, tag = %outcome.tag(), "traversal halted");
            return Traversed::Halted(outcome);
        }
        if let Payload::Single(value) = outcome.into_payload() {
            accumulated.push(value);
        }
    }

    Traversed::Completed(accumulated)
}

/// Keep every outcome that is not a failure, in order and unchanged
pub fn reject_failures<T, I>(outcomes: I) -> Vec<Outcome<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    outcomes
        .into_iter()
        .filter(|outcome| !outcome.is_failure())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Tag;
    use std::cell::RefCell;

    #[test]
    fn test_map_while_success_collects_in_order() {
        let traversed = map_while_success(vec!["a", "bb", "ccc"], |s| Outcome::success(s.len()));
        assert_eq!(traversed, Traversed::Completed(vec![1, 2, 3]));
    }

    #[test]
    fn test_map_while_success_stops_at_first_failure() {
        let visited = RefCell::new(Vec::new());
        let traversed = map_while_success(1..=5, |x| {
            visited.borrow_mut().push(x);
            if x % 2 == 0 {
                Outcome::failure(x * 100)
            } else {
                Outcome::success(x)
            }
        });

        assert_eq!(traversed, Traversed::Halted(Outcome::failure(200)));
        assert_eq!(*visited.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_map_while_success_returns_bare_failure_untouched() {
        let traversed = map_while_success(vec![1, 2], |_| Outcome::<i32>::error());
        assert_eq!(traversed, Traversed::Halted(Outcome::error()));
    }

    #[test]
    fn test_map_while_success_halts_on_other_tags() {
        let traversed = map_while_success(vec![1, 2], |x| Outcome::tagged("pending", x));
        assert_eq!(traversed, Traversed::Halted(Outcome::tagged("pending", 1)));
    }

    #[test]
    fn test_map_while_success_skips_bare_success() {
        let traversed = map_while_success(vec![1, 2, 3], |x| {
            if x == 2 {
                Outcome::ok()
            } else {
                Outcome::success(x)
            }
        });
        assert_eq!(traversed, Traversed::Completed(vec![1, 3]));
    }

    #[test]
    fn test_map_while_success_empty_input() {
        let traversed = map_while_success(Vec::<i32>::new(), Outcome::success);
        assert_eq!(traversed, Traversed::Completed(Vec::new()));
        assert!(traversed.is_completed());
    }

    #[test]
    fn test_traversed_into_result() {
        let ok: Result<Vec<i32>, Outcome<i32>> = Traversed::Completed(vec![1]).into();
        assert_eq!(ok, Ok(vec![1]));
        let err = Traversed::Halted(Outcome::failure(3)).into_result();
        assert_eq!(err, Err(Outcome::failure(3)));
    }

    #[test]
    fn test_reject_failures_keeps_order_and_shape() {
        let kept = reject_failures(vec![
            Outcome::success(1),
            Outcome::failure(2),
            Outcome::ok(),
            Outcome::error(),
            Outcome::tagged("pending", 3),
            Outcome::group(Tag::Failure, vec![4, 5]),
        ]);

        assert_eq!(
            kept,
            vec![
                Outcome::success(1),
                Outcome::ok(),
                Outcome::tagged("pending", 3),
                Outcome::group(Tag::Failure, vec![4, 5]),
            ]
        );
    }
}

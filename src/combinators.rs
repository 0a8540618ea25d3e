//! Scalar combinators
//!
//! Each combinator consumes one [`Outcome`] and produces one outcome (or a
//! plain value). Shape mismatches are not errors: an outcome that does not
//! have the form a combinator acts on is handed back untouched and the
//! supplied closure is never called.

use crate::error::OutcomeError;
use crate::outcome::{Outcome, Payload, Tag};

/// Return value of a [`map_success`] / [`map_failure`] transform
///
/// A plain [`Mapped::Value`] is lifted into the side being mapped. A
/// [`Mapped::Outcome`] replaces the input outright, which is how a transform
/// re-tags a success as a failure (or vice versa).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapped<T> {
    Value(T),
    /// Returned verbatim whatever its tag, including tags other than
    /// `success` / `failure`. Use [`Mapped::Value`] to have a result wrapped
    /// as a success.
    Outcome(Outcome<T>),
}

impl<T> Mapped<T> {
    pub fn value(value: T) -> Self {
        Mapped::Value(value)
    }

    pub fn outcome(outcome: Outcome<T>) -> Self {
        Mapped::Outcome(outcome)
    }

    fn lift(self, tag: Tag) -> Outcome<T> {
        match self {
            Mapped::Value(value) => Outcome::new(tag, Payload::Single(value)),
            Mapped::Outcome(outcome) => outcome,
        }
    }
}

impl<T> From<Outcome<T>> for Mapped<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Mapped::Outcome(outcome)
    }
}

/// An outcome narrowed to single-payload success or failure
///
/// This is the input domain of [`unwrap_or`]. Bare markers, multi-value
/// groups and anomalous tags cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T> {
    Success(T),
    Failure(T),
}

impl<T> TryFrom<Outcome<T>> for Settled<T> {
    type Error = OutcomeError;

    fn try_from(outcome: Outcome<T>) -> Result<Self, Self::Error> {
        match outcome.into_parts() {
            (Tag::Success, Payload::Single(value)) => Ok(Settled::Success(value)),
            (Tag::Failure, Payload::Single(error)) => Ok(Settled::Failure(error)),
            (tag, payload) => Err(OutcomeError::unsettled(tag, payload.arity())),
        }
    }
}

impl<T> From<Result<T, T>> for Settled<T> {
    fn from(result: Result<T, T>) -> Self {
        match result {
            Ok(value) => Settled::Success(value),
            Err(error) => Settled::Failure(error),
        }
    }
}

impl<T> From<Settled<T>> for Outcome<T> {
    fn from(settled: Settled<T>) -> Self {
        match settled {
            Settled::Success(value) => Outcome::success(value),
            Settled::Failure(error) => Outcome::failure(error),
        }
    }
}

/// Drop the payload of a success, keep everything else as is
pub fn summarize<T>(outcome: Outcome<T>) -> Outcome<T> {
    if outcome.is_success() {
        Outcome::ok()
    } else {
        outcome
    }
}

/// Run `f` on the payload of a single-payload success; always return the input
pub fn tap_if_success<T, F>(outcome: Outcome<T>, f: F) -> Outcome<T>
where
    F: FnOnce(&T),
{
    tap_single(outcome, &Tag::Success, f)
}

/// Run `f` when the input is the bare success marker; always return the input
pub fn tap_if_bare_success<T, F>(outcome: Outcome<T>, f: F) -> Outcome<T>
where
    F: FnOnce(),
{
    tap_bare(outcome, &Tag::Success, f)
}

/// Failure-side counterpart of [`tap_if_success`]
pub fn tap_if_failure<T, F>(outcome: Outcome<T>, f: F) -> Outcome<T>
where
    F: FnOnce(&T),
{
    tap_single(outcome, &Tag::Failure, f)
}

/// Failure-side counterpart of [`tap_if_bare_success`]
pub fn tap_if_bare_failure<T, F>(outcome: Outcome<T>, f: F) -> Outcome<T>
where
    F: FnOnce(),
{
    tap_bare(outcome, &Tag::Failure, f)
}

fn tap_single<T, F>(outcome: Outcome<T>, tag: &Tag, f: F) -> Outcome<T>
where
    F: FnOnce(&T),
{
    if outcome.tag() == tag {
        if let Payload::Single(value) = outcome.payload() {
            f(value);
        }
    }
    outcome
}

fn tap_bare<T, F>(outcome: Outcome<T>, tag: &Tag, f: F) -> Outcome<T>
where
    F: FnOnce(),
{
    if outcome.tag() == tag && outcome.payload().is_bare() {
        f();
    }
    outcome
}

/// Transform the payload of a single-payload success
///
/// The payload type is shared by every tag, so `f` maps `T` to `T`. To move
/// between payload types (a `String` to its length, say) use a payload that
/// can hold both, such as [`DynOutcome`](crate::outcome::DynOutcome) or an
/// enum of your own.
///
/// ```
/// use tagged_outcome::{map_success, Mapped, Outcome};
///
/// let doubled = map_success(Outcome::success(21), |x| Mapped::value(x * 2));
/// assert_eq!(doubled, Outcome::success(42));
///
/// let rejected = map_success(Outcome::success(-1), |x| {
///     if x < 0 {
///         Outcome::failure(x).into()
///     } else {
///         Mapped::value(x)
///     }
/// });
/// assert_eq!(rejected, Outcome::failure(-1));
/// ```
pub fn map_success<T, F>(outcome: Outcome<T>, f: F) -> Outcome<T>
where
    F: FnOnce(T) -> Mapped<T>,
{
    map_single(outcome, Tag::Success, f)
}

/// Transform the payload of a single-payload failure
///
/// Same re-tagging rule as [`map_success`]: returning an outcome from `f`
/// replaces the input, so a failure can be recovered into a success. `f`
/// keeps the payload type `T`, as in [`map_success`].
pub fn map_failure<T, F>(outcome: Outcome<T>, f: F) -> Outcome<T>
where
    F: FnOnce(T) -> Mapped<T>,
{
    map_single(outcome, Tag::Failure, f)
}

fn map_single<T, F>(outcome: Outcome<T>, tag: Tag, f: F) -> Outcome<T>
where
    F: FnOnce(T) -> Mapped<T>,
{
    if outcome.tag() != &tag {
        return outcome;
    }
    match outcome.into_parts() {
        (tag, Payload::Single(value)) => f(value).lift(tag),
        (tag, payload) => Outcome::new(tag, payload),
    }
}

/// Payload of a success, or `default` for a failure
pub fn unwrap_or<T>(settled: Settled<T>, default: T) -> T {
    match settled {
        Settled::Success(value) => value,
        Settled::Failure(_) => default,
    }
}

impl<T> Outcome<T> {
    /// Method form of [`summarize`]
    pub fn summarize(self) -> Self {
        summarize(self)
    }

    /// Method form of [`tap_if_success`]
    pub fn tap_if_success(self, f: impl FnOnce(&T)) -> Self {
        tap_if_success(self, f)
    }

    /// Method form of [`tap_if_bare_success`]
    pub fn tap_if_bare_success(self, f: impl FnOnce()) -> Self {
        tap_if_bare_success(self, f)
    }

    /// Method form of [`map_success`]
    pub fn map_success(self, f: impl FnOnce(T) -> Mapped<T>) -> Self {
        map_success(self, f)
    }

    /// Method form of [`map_failure`]
    pub fn map_failure(self, f: impl FnOnce(T) -> Mapped<T>) -> Self {
        map_failure(self, f)
    }

    /// Narrow to [`Settled`] and apply [`unwrap_or`]
    ///
    /// Outcomes outside the settled domain are reported instead of silently
    /// yielding `default`.
    pub fn unwrap_or(self, default: T) -> Result<T, OutcomeError> {
        Settled::try_from(self).map(|settled| unwrap_or(settled, default))
    }
}

//! Outcome model
//!
//! An [`Outcome`] is a discriminator ([`Tag`]) plus zero or more payload
//! values ([`Payload`]). Two tags are privileged: `success` and `failure`.
//! Every other label is a legal tag that the grouping engine treats
//! generically.
//!
//! Only the zero- and single-payload forms of the privileged tags are
//! classified by [`is_success`] and [`is_failure`]. A success tag carrying a
//! multi-value group is still a valid outcome, it just is not "a success" for
//! the scalar combinators.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminator of an outcome
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tag {
    Success,
    Failure,
    /// Any label other than `success` / `failure`
    Other(String),
}

impl Tag {
    /// Build a tag from a label, mapping `"success"` and `"failure"` onto the
    /// privileged variants.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        match label.as_str() {
            "success" => Tag::Success,
            "failure" => Tag::Failure,
            _ => Tag::Other(label),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tag::Success => "success",
            Tag::Failure => "failure",
            Tag::Other(label) => label,
        }
    }

    /// True for `success` and `failure`
    pub fn is_privileged(&self) -> bool {
        matches!(self, Tag::Success | Tag::Failure)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Tag::new(label)
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        Tag::new(label)
    }
}

/// Values carried alongside a tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Payload<T> {
    /// The bare tag, no data
    Bare,
    /// Exactly one value
    Single(T),
    /// Two or more values, in order
    Group(Vec<T>),
}

impl<T> Payload<T> {
    /// Number of values carried
    pub fn arity(&self) -> usize {
        match self {
            Payload::Bare => 0,
            Payload::Single(_) => 1,
            Payload::Group(values) => values.len(),
        }
    }

    /// Normalize a list of values into the matching arity form
    pub fn from_values(mut values: Vec<T>) -> Self {
        match values.len() {
            0 => Payload::Bare,
            1 => match values.pop() {
                Some(value) => Payload::Single(value),
                None => Payload::Bare,
            },
            _ => Payload::Group(values),
        }
    }

    /// Collapse a group of zero or one values to the bare / single form
    pub fn normalize(self) -> Self {
        match self {
            Payload::Group(values) => Payload::from_values(values),
            payload => payload,
        }
    }

    pub fn is_bare(&self) -> bool {
        matches!(self, Payload::Bare)
    }

    pub fn as_single(&self) -> Option<&T> {
        match self {
            Payload::Single(value) => Some(value),
            _ => None,
        }
    }
}

/// Result of a fallible operation: a tag plus its payload
///
/// Outcomes are never mutated by the combinators in this crate; every
/// combinator consumes its input and hands back a new (or the same) value.
/// A `Payload::Group` always holds two or more values; smaller groups are
/// collapsed on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "RawOutcome<T>", bound(deserialize = "T: Deserialize<'de>"))
)]
pub struct Outcome<T> {
    tag: Tag,
    payload: Payload<T>,
}

/// Wire shape of [`Outcome`], normalized through [`Outcome::new`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawOutcome<T> {
    tag: Tag,
    payload: Payload<T>,
}

#[cfg(feature = "serde")]
impl<T> From<RawOutcome<T>> for Outcome<T> {
    fn from(raw: RawOutcome<T>) -> Self {
        Outcome::new(raw.tag, raw.payload)
    }
}

/// Outcome with dynamically shaped JSON payloads
#[cfg(feature = "serde")]
pub type DynOutcome = Outcome<serde_json::Value>;

impl<T> Outcome<T> {
    /// Build an outcome, collapsing undersized groups
    pub fn new(tag: Tag, payload: Payload<T>) -> Self {
        Self {
            tag,
            payload: payload.normalize(),
        }
    }

    /// Success carrying one value
    pub fn success(value: T) -> Self {
        Self::new(Tag::Success, Payload::Single(value))
    }

    /// Failure carrying one value
    pub fn failure(error: T) -> Self {
        Self::new(Tag::Failure, Payload::Single(error))
    }

    /// The bare success marker
    pub fn ok() -> Self {
        Self::new(Tag::Success, Payload::Bare)
    }

    /// The bare failure marker
    pub fn error() -> Self {
        Self::new(Tag::Failure, Payload::Bare)
    }

    /// Arbitrary tag carrying one value
    pub fn tagged(tag: impl Into<Tag>, value: T) -> Self {
        Self::new(tag.into(), Payload::Single(value))
    }

    /// Arbitrary tag with no payload
    pub fn bare(tag: impl Into<Tag>) -> Self {
        Self::new(tag.into(), Payload::Bare)
    }

    /// Arbitrary tag carrying an ordered group of values.
    ///
    /// Zero or one values collapse to the bare / single forms.
    pub fn group(tag: impl Into<Tag>, values: Vec<T>) -> Self {
        Self::new(tag.into(), Payload::from_values(values))
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn payload(&self) -> &Payload<T> {
        &self.payload
    }

    pub fn into_payload(self) -> Payload<T> {
        self.payload
    }

    pub fn into_parts(self) -> (Tag, Payload<T>) {
        (self.tag, self.payload)
    }

    pub fn is_success(&self) -> bool {
        self.tag == Tag::Success && !self.is_group()
    }

    pub fn is_failure(&self) -> bool {
        self.tag == Tag::Failure && !self.is_group()
    }

    fn is_group(&self) -> bool {
        matches!(self.payload, Payload::Group(_))
    }
}

/// True iff `outcome` is the bare success tag or a success-tagged single payload
pub fn is_success<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_success()
}

/// True iff `outcome` is the bare failure tag or a failure-tagged single payload
pub fn is_failure<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_failure()
}

impl<T> From<Result<T, T>> for Outcome<T> {
    fn from(result: Result<T, T>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Bare => write!(f, "{}", self.tag),
            Payload::Single(value) => write!(f, "{}({})", self.tag, value),
            Payload::Group(values) => {
                write!(f, "{}(", self.tag)?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str(")")
            }
        }
    }
}

//! Grouping engine
//!
//! Partitions a sequence of outcomes by tag and re-aggregates the partition
//! into a single outcome. Grouping never drops an input: every outcome
//! contributes exactly one [`Entry`] to the list of its tag.

use std::collections::BTreeMap;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::outcome::{Outcome, Payload, Tag};

/// What an outcome contributes to its tag's list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Entry<T> {
    /// A bare tag stands in for its own payload
    Marker(Tag),
    Value(T),
    /// A multi-value payload kept together as one composite entry
    Group(Vec<T>),
}

impl<T> Entry<T> {
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Entry::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Entry::Value(value) => Some(value),
            _ => None,
        }
    }
}

fn split_entry<T>(outcome: Outcome<T>) -> (Tag, Entry<T>) {
    let (tag, payload) = outcome.into_parts();
    let entry = match payload {
        Payload::Bare => Entry::Marker(tag.clone()),
        Payload::Single(value) => Entry::Value(value),
        Payload::Group(values) => Entry::Group(values),
    };
    (tag, entry)
}

/// Tags that [`group_by_tag`] always seeds
pub const DEFAULT_REQUIRED_TAGS: [Tag; 2] = [Tag::Success, Tag::Failure];

/// Outcomes partitioned by tag, insertion order kept within each tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouped<T> {
    groups: BTreeMap<Tag, Vec<Entry<T>>>,
}

impl<T> Default for Grouped<T> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<T> Grouped<T> {
    /// Empty grouping with `required` keys present
    pub fn with_required<I>(required: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        let groups = required.into_iter().map(|tag| (tag, Vec::new())).collect();
        Self { groups }
    }

    pub fn push(&mut self, outcome: Outcome<T>) {
        let (tag, entry) = split_entry(outcome);
        self.groups.entry(tag).or_default().push(entry);
    }

    /// Entries recorded under `tag`; empty when the tag never appeared
    pub fn get(&self, tag: &Tag) -> &[Entry<T>] {
        self.groups.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_tag(&self, tag: &Tag) -> bool {
        self.groups.contains_key(tag)
    }

    pub fn successes(&self) -> &[Entry<T>] {
        self.get(&Tag::Success)
    }

    pub fn failures(&self) -> &[Entry<T>] {
        self.get(&Tag::Failure)
    }

    /// Keys other than `success` / `failure`, with their entries
    pub fn others(&self) -> impl Iterator<Item = (&Tag, &[Entry<T>])> {
        self.iter().filter(|(tag, _)| !tag.is_privileged())
    }

    pub fn has_others(&self) -> bool {
        self.groups.keys().any(|tag| !tag.is_privileged())
    }

    /// Number of entries across all tags
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &[Entry<T>])> {
        self.groups.iter().map(|(tag, entries)| (tag, entries.as_slice()))
    }

    pub fn remove(&mut self, tag: &Tag) -> Vec<Entry<T>> {
        self.groups.remove(tag).unwrap_or_default()
    }

    pub fn into_inner(self) -> BTreeMap<Tag, Vec<Entry<T>>> {
        self.groups
    }
}

impl<T> Index<&Tag> for Grouped<T> {
    type Output = [Entry<T>];

    fn index(&self, tag: &Tag) -> &Self::Output {
        self.get(tag)
    }
}

impl<T> Extend<Outcome<T>> for Grouped<T> {
    fn extend<I: IntoIterator<Item = Outcome<T>>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

impl<T> FromIterator<Outcome<T>> for Grouped<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        group_by_tag(iter)
    }
}

impl<T> IntoIterator for Grouped<T> {
    type Item = (Tag, Vec<Entry<T>>);
    type IntoIter = std::collections::btree_map::IntoIter<Tag, Vec<Entry<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group with `success` and `failure` always present
pub fn group_by_tag<T, I>(outcomes: I) -> Grouped<T>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    group_by_tags(outcomes, DEFAULT_REQUIRED_TAGS)
}

/// Group with a caller-chosen set of keys always present
///
/// ```
/// use tagged_outcome::{group_by_tags, Outcome, Tag};
///
/// let grouped = group_by_tags(vec![Outcome::success(1)], [Tag::from("skipped")]);
/// assert!(grouped.get(&Tag::from("skipped")).is_empty());
/// assert_eq!(grouped.successes().len(), 1);
/// assert!(!grouped.contains_tag(&Tag::Failure));
/// ```
pub fn group_by_tags<T, I, R>(outcomes: I, required: R) -> Grouped<T>
where
    I: IntoIterator<Item = Outcome<T>>,
    R: IntoIterator<Item = Tag>,
{
    let mut grouped = Grouped::with_required(required);
    grouped.extend(outcomes);
    grouped
}

/// Failure side of [`collect_errors`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedErrors<T> {
    /// Entries of every tag other than `success` / `failure`, if any appeared
    pub anomalies: Option<Grouped<T>>,
    pub failures: Vec<Entry<T>>,
}

/// Payload produced by [`collect_errors`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected<T> {
    Successes(Vec<Entry<T>>),
    Errors(CollectedErrors<T>),
}

impl<T> Collected<T> {
    pub fn successes(&self) -> Option<&[Entry<T>]> {
        match self {
            Collected::Successes(entries) => Some(entries),
            Collected::Errors(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&CollectedErrors<T>> {
        match self {
            Collected::Successes(_) => None,
            Collected::Errors(errors) => Some(errors),
        }
    }
}

/// Fold a sequence of outcomes into one
///
/// - only `success` / `failure` tags and no failures: success with every
///   success entry, in order
/// - only `success` / `failure` tags with failures: failure with the failure
///   entries
/// - any other tag: failure carrying the other tags' entries as anomalies
///   alongside the failure entries
pub fn collect_errors<T, I>(outcomes: I) -> Outcome<Collected<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut grouped = group_by_tag(outcomes);
    let successes = grouped.remove(&Tag::Success);
    let failures = grouped.remove(&Tag::Failure);

    if grouped.has_others() {
        tracing::debug!(
            anomalous_tags = ?grouped.tags().map(Tag::as_str).collect::<Vec<_>>(),
            anomalies = grouped.total(),
            failures = failures.len(),
            "escalating outcomes with unrecognized tags to failure"
        );
        return Outcome::failure(Collected::Errors(CollectedErrors {
            anomalies: Some(grouped),
            failures,
        }));
    }

    if failures.is_empty() {
        Outcome::success(Collected::Successes(successes))
    } else {
        Outcome::failure(Collected::Errors(CollectedErrors {
            anomalies: None,
            failures,
        }))
    }
}

//! Property tests for the outcome combinators
//!
//! These tests verify:
//! - Grouping keeps every input exactly once
//! - collect_errors succeeds iff every input is a success
//! - map_while_success keeps order and short-circuits on the first failure
//! - unwrap_or and summarize laws

use proptest::prelude::*;
use tagged_outcome::prelude::*;

fn arb_tag() -> impl Strategy<Value = Tag> {
    prop_oneof![
        3 => Just(Tag::Success),
        2 => Just(Tag::Failure),
        1 => "[a-z]{1,6}".prop_map(Tag::from),
    ]
}

fn arb_outcome() -> impl Strategy<Value = Outcome<i32>> {
    (arb_tag(), prop::collection::vec(any::<i32>(), 0..4))
        .prop_map(|(tag, values)| Outcome::group(tag, values))
}

fn arb_settled_outcome() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        any::<i32>().prop_map(Outcome::failure),
    ]
}

proptest! {
    #[test]
    fn test_grouping_preserves_count(outcomes in prop::collection::vec(arb_outcome(), 0..50)) {
        let expected = outcomes.len();
        let grouped = group_by_tag(outcomes);
        prop_assert_eq!(grouped.iter().map(|(_, entries)| entries.len()).sum::<usize>(), expected);
        prop_assert_eq!(grouped.total(), expected);
        prop_assert!(grouped.contains_tag(&Tag::Success));
        prop_assert!(grouped.contains_tag(&Tag::Failure));
    }

    #[test]
    fn test_grouping_keeps_relative_order(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let outcomes: Vec<_> = values
            .iter()
            .map(|v| if v % 2 == 0 { Outcome::success(*v) } else { Outcome::failure(*v) })
            .collect();
        let grouped = group_by_tag(outcomes);

        let evens: Vec<i32> = values.iter().copied().filter(|v| v % 2 == 0).collect();
        let grouped_evens: Vec<i32> =
            grouped.successes().iter().filter_map(Entry::as_value).copied().collect();
        prop_assert_eq!(grouped_evens, evens);
    }

    #[test]
    fn test_collect_errors_success_iff_all_success(
        outcomes in prop::collection::vec(arb_outcome(), 0..30)
    ) {
        let all_success = outcomes.iter().all(|o| o.tag() == &Tag::Success);
        let collected = collect_errors(outcomes);
        prop_assert_eq!(collected.is_success(), all_success);
        prop_assert_eq!(collected.is_failure(), !all_success);
    }

    #[test]
    fn test_map_while_success_preserves_order(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let traversed = map_while_success(values.clone(), Outcome::success);
        prop_assert_eq!(traversed, Traversed::Completed(values));
    }

    #[test]
    fn test_map_while_success_short_circuits(
        values in prop::collection::vec(0i32..100, 1..50),
        stop in 0i32..100,
    ) {
        let mut visited = Vec::new();
        let traversed = map_while_success(values.clone(), |v| {
            visited.push(v);
            if v == stop { Outcome::failure(v) } else { Outcome::success(v) }
        });

        match values.iter().position(|v| *v == stop) {
            Some(index) => {
                prop_assert_eq!(traversed, Traversed::Halted(Outcome::failure(stop)));
                prop_assert_eq!(visited, values[..=index].to_vec());
            }
            None => {
                prop_assert_eq!(traversed, Traversed::Completed(values.clone()));
                prop_assert_eq!(visited, values);
            }
        }
    }

    #[test]
    fn test_unwrap_or_laws(value in any::<i32>(), default in any::<i32>()) {
        prop_assert_eq!(unwrap_or(Settled::Success(value), default), value);
        prop_assert_eq!(unwrap_or(Settled::Failure(value), default), default);
        prop_assert_eq!(Outcome::success(value).unwrap_or(default), Ok(value));
        prop_assert_eq!(Outcome::failure(value).unwrap_or(default), Ok(default));
    }

    #[test]
    fn test_summarize_idempotent(outcome in arb_outcome()) {
        let once = summarize(outcome.clone());
        prop_assert_eq!(summarize(once.clone()), once.clone());
        if outcome.is_success() {
            prop_assert_eq!(once, Outcome::ok());
        } else {
            prop_assert_eq!(once, outcome);
        }
    }

    #[test]
    fn test_reject_failures_removes_only_failures(
        outcomes in prop::collection::vec(arb_outcome(), 0..40)
    ) {
        let expected: Vec<_> = outcomes.iter().filter(|o| !is_failure(o)).cloned().collect();
        let kept = reject_failures(outcomes);
        prop_assert!(kept.iter().all(|o| !o.is_failure()));
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn test_settled_round_trip(outcome in arb_settled_outcome()) {
        let settled = Settled::try_from(outcome.clone());
        prop_assert!(settled.is_ok());
        let back: Outcome<i32> = settled.map(Outcome::from).unwrap_or_else(|_| Outcome::error());
        prop_assert_eq!(back, outcome);
    }
}

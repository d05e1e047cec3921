//! Traversal of tagged lists against each family.

use proptest::prelude::*;
use rightward::family::{Attempt, Catch, Exception, Maybe, Outcome, Validated};
use rightward::list::{List, Typed};
use rightward::typeclass::ToMonad;
use rstest::rstest;

// =============================================================================
// Round trip and short-circuit properties
// =============================================================================

proptest! {
    #[test]
    fn prop_traverse_of_rights_is_right_of_payloads(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = List::from(values.iter().copied().map(Outcome::<i32, String>::success).collect::<Vec<_>>());
        prop_assert_eq!(list.typed().traverse(), Outcome::success(values));
    }

    #[test]
    fn prop_traverse_returns_leftmost_failure(
        prefix in prop::collection::vec(any::<i32>(), 0..10),
        failures in prop::collection::vec(any::<String>(), 1..5),
    ) {
        let mut items: Vec<Outcome<i32, String>> = prefix.into_iter().map(Outcome::success).collect();
        items.extend(failures.iter().cloned().map(Outcome::failure));
        prop_assert_eq!(List::from(items).typed().traverse(), Outcome::failure(failures[0].clone()));
    }

    #[test]
    fn prop_validated_traverse_keeps_every_error_in_order(
        entries in prop::collection::vec(prop::result::maybe_ok(any::<i32>(), any::<String>()), 0..20),
    ) {
        let expected_errors: Vec<String> = entries
            .iter()
            .filter_map(|entry| entry.as_ref().err().cloned())
            .collect();
        let list: List<Validated<i32, String>> = entries.into_iter().map(Validated::from).collect();
        let traversed = list.typed().traverse();
        if expected_errors.is_empty() {
            prop_assert!(traversed.is_valid());
        } else {
            prop_assert_eq!(traversed, Validated::invalid(expected_errors));
        }
    }
}

// =============================================================================
// Per-family examples
// =============================================================================

#[rstest]
fn maybe_traversal_with_nothing() {
    let list = List::from(vec![Maybe::just(1), Maybe::Nothing, Maybe::just(3)]);
    assert_eq!(list.typed().traverse(), Maybe::Nothing);
}

#[rstest]
fn attempt_traversal_keeps_first_error() {
    fn parse(input: &str) -> Result<i32, Exception> {
        Ok(input.parse::<i32>()?)
    }

    let catch = Catch::new().of::<std::num::ParseIntError>();
    let items: Vec<Attempt<i32>> = ["1", "x", "2"]
        .into_iter()
        .map(|input| Attempt::run(catch.clone(), || parse(input)).expect("parse errors are caught"))
        .collect();
    let traversed = List::from(items).typed().traverse();
    assert!(traversed.is_error());
    assert_eq!(
        traversed.exception().map(ToString::to_string),
        Some("invalid digit found in string".to_string())
    );
}

#[rstest]
fn traverse_with_uses_semigroup_errors() {
    let list = List::from(vec![
        Validated::<i32, Vec<&str>>::invalid(vec!["a", "b"]),
        Validated::valid(1),
        Validated::invalid(vec!["c"]),
    ]);
    assert_eq!(
        list.typed().traverse_with(|item| item),
        Validated::invalid(vec!["a", "b", "c"])
    );
}

#[rstest]
fn traverse_with_converts_each_element() {
    let list: List<Option<&str>, Typed> = List::from(vec![Some("4"), Some("2")]).typed();
    let parsed = list.traverse_with(|item| item.and_then(|text| text.parse::<i32>().ok()));
    assert_eq!(parsed, Some(vec![4, 2]));
}

#[rstest]
#[case(vec![], Outcome::success(vec![]))]
#[case(vec![Ok(1), Ok(2)], Outcome::success(vec![1, 2]))]
#[case(vec![Ok(1), Err("e"), Err("f")], Outcome::failure("e"))]
fn vec_of_results_to_monad(
    #[case] items: Vec<Result<i32, &'static str>>,
    #[case] expected: Outcome<Vec<i32>, &'static str>,
) {
    let outcomes: Vec<Outcome<i32, &str>> = items.into_iter().map(Outcome::from).collect();
    assert_eq!(outcomes.to_monad(), expected);
}

#[rstest]
#[allow(deprecated)]
fn inferred_tag_matches_explicit_tag() {
    rightward::deprecation::set_warnings(false);
    let items = vec![Maybe::just(1), Maybe::just(2)];
    let inferred = List::from(items.clone()).infer_tag().expect("non-empty");
    assert_eq!(inferred.traverse(), List::from(items).typed().traverse());
    rightward::deprecation::set_warnings(true);
}

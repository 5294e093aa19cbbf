//! Property-based tests for rampart-constraint.

use proptest::prelude::*;
use rampart_constraint::prelude::*;

fn fixed(pass: bool, error: usize) -> impl Constraint<Input = u8, Error = usize> + 'static {
    rule(move |_: &u8| pass, error)
}

fn children(outcomes: &[bool]) -> Vec<BoxConstraint<u8, usize>> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, &pass)| fixed(pass, i).boxed())
        .collect()
}

fn failing_indices(outcomes: &[bool]) -> Vec<usize> {
    outcomes
        .iter()
        .enumerate()
        .filter(|(_, pass)| !**pass)
        .map(|(i, _)| i)
        .collect()
}

// ============================================================================
// IDEMPOTENCY: evaluate(x) == evaluate(x)
// ============================================================================

proptest! {
    #[test]
    fn length_rules_idempotent(s in ".*") {
        let v = min_length(3).with_error("short").and(max_length(10).with_error("long"));
        prop_assert_eq!(v.evaluate(&*s), v.evaluate(&*s));
    }

    #[test]
    fn range_idempotent(n in any::<i64>()) {
        let v = between(0i64, 100i64).unwrap().with_error("range");
        prop_assert_eq!(v.evaluate(&n), v.evaluate(&n));
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let v = email().with_error("email");
        prop_assert_eq!(v.evaluate(&*s), v.evaluate(&*s));
    }
}

// ============================================================================
// ALL-OF: errors are exactly the failing children, in order
// ============================================================================

proptest! {
    #[test]
    fn all_of_reports_every_failure_in_order(outcomes in prop::collection::vec(any::<bool>(), 0..10)) {
        let compound = CompoundConstraint::all_of(children(&outcomes));
        let expected = failing_indices(&outcomes);

        match compound.evaluate(&0) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(summary) => prop_assert_eq!(summary.into_vec(), expected),
        }
    }

    #[test]
    fn all_of_error_count_is_sum_of_children(
        left in prop::collection::vec(any::<bool>(), 0..6),
        right in prop::collection::vec(any::<bool>(), 0..6),
    ) {
        let left_compound = CompoundConstraint::all_of(children(&left));
        let right_compound = CompoundConstraint::all_of(children(&right));
        let left_count = left_compound.evaluate(&0).error_count();
        let right_count = right_compound.evaluate(&0).error_count();

        let outer = all_of![left_compound, right_compound];
        prop_assert_eq!(outer.evaluate(&0).error_count(), left_count + right_count);
    }
}

// ============================================================================
// ANY-OF: success iff some child passes, otherwise the last failure
// ============================================================================

proptest! {
    #[test]
    fn any_of_passes_iff_some_child_passes(outcomes in prop::collection::vec(any::<bool>(), 1..10)) {
        let compound = CompoundConstraint::any_of(children(&outcomes));
        let result = compound.evaluate(&0);

        prop_assert_eq!(result.is_ok(), outcomes.iter().any(|&pass| pass));
        if let Err(summary) = result {
            prop_assert_eq!(summary.errors(), &[outcomes.len() - 1]);
        }
    }
}

// ============================================================================
// CONDITIONS: failing conditions mask the target
// ============================================================================

proptest! {
    #[test]
    fn conditions_gate_the_target(
        conditions in prop::collection::vec(any::<bool>(), 0..6),
        target in any::<bool>(),
    ) {
        let mut gated = ConditionedConstraint::new(fixed(target, 100));
        for (i, &pass) in conditions.iter().enumerate() {
            gated.add_condition(fixed(pass, i));
        }

        let failing = failing_indices(&conditions);
        let expected = if !failing.is_empty() {
            failing
        } else if target {
            Vec::new()
        } else {
            vec![100]
        };

        prop_assert_eq!(gated.evaluate(&0).errors().to_vec(), expected);
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

proptest! {
    #[test]
    fn strict_digits_iff_every_char_is_a_digit(s in "[0-9a-z]{0,12}") {
        let strict = CharacterSet::ascii_digits().strict();
        prop_assert_eq!(strict.evaluate(&*s), s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn loose_digits_iff_some_char_is_a_digit(s in "[0-9a-z]{0,12}") {
        let loose = CharacterSet::ascii_digits().loose();
        prop_assert_eq!(loose.evaluate(&*s), s.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn length_between_agrees_with_min_and_max(s in ".{0,20}", min in 0usize..10, span in 0usize..10) {
        let max = min + span;
        let between = length_between(min, max).unwrap();
        let split = min_length(min).evaluate(&*s) && max_length(max).evaluate(&*s);
        prop_assert_eq!(between.evaluate(&*s), split);
    }

    #[test]
    fn negation_inverts_predicates(s in ".{0,20}") {
        prop_assert_eq!(min_length(5).negate().evaluate(&*s), !min_length(5).evaluate(&*s));
    }

    #[test]
    fn required_rejects_only_missing_values(value in prop::option::of(any::<u8>())) {
        let checked = at_most(200u8).with_error("high").required("missing");
        match value {
            None => prop_assert_eq!(checked.evaluate(&value).errors().to_vec(), vec!["missing"]),
            Some(n) => prop_assert_eq!(checked.evaluate(&value).is_ok(), n <= 200),
        }
    }
}

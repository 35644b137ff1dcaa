// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Result Combinators
//!
//! The connectives must agree with the Boolean truth tables on the
//! success/failure/gave-up trichotomy, and evidence may only appear where
//! every contributing branch was proved.

use cim_propcheck::result::{add_info, add_shrinks, and, iff, imp, or};
use cim_propcheck::{Certificate, TestResult, Transport};
use proptest::prelude::*;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn label() -> impl Strategy<Value = String> {
    "[a-z]{1,3} := [0-9]{1,2}"
}

fn certificate() -> impl Strategy<Value = Certificate> {
    "[a-z ]{1,12}".prop_map(|step| Certificate::axiom(step))
}

/// Generate arbitrary test results
fn test_result() -> impl Strategy<Value = TestResult> {
    prop_oneof![
        (proptest::option::of(certificate()), prop::collection::vec(label(), 0..3))
            .prop_map(|(evidence, labels)| TestResult::Success { evidence, labels }),
        Just(TestResult::GaveUp),
        failure(),
    ]
}

/// Generate failures only
fn failure() -> impl Strategy<Value = TestResult> {
    (certificate(), prop::collection::vec(label(), 0..3), 0usize..20).prop_map(
        |(refutation, labels, shrinks)| TestResult::Failure {
            refutation,
            labels,
            shrinks,
        },
    )
}

fn transport() -> impl Strategy<Value = Transport> {
    prop_oneof![
        Just(Transport::Identity),
        "[a-z]{1,8}".prop_map(Transport::Equivalence),
        "[a-z]{1,8}".prop_map(Transport::Weakening),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: A conjunction fails exactly when a conjunct fails
    #[test]
    fn prop_and_failure_dominates(r1 in test_result(), r2 in test_result()) {
        let either_failed = r1.is_failure() || r2.is_failure();
        let both_succeeded = r1.is_success() && r2.is_success();
        let result = and(r1, r2);

        prop_assert_eq!(result.is_failure(), either_failed);
        prop_assert_eq!(result.is_success(), both_succeeded);
    }

    /// Property: A disjunction succeeds exactly when a disjunct succeeds
    #[test]
    fn prop_or_success_dominates(r1 in test_result(), r2 in test_result()) {
        let either_succeeded = r1.is_success() || r2.is_success();
        let both_failed = r1.is_failure() && r2.is_failure();
        let result = or(r1, r2);

        prop_assert_eq!(result.is_success(), either_succeeded);
        prop_assert_eq!(result.is_failure(), both_failed);
    }

    /// Property: Conjoined evidence needs evidence from both conjuncts
    #[test]
    fn prop_and_evidence_is_conservative(r1 in test_result(), r2 in test_result()) {
        let both_proved = r1.evidence().is_some() && r2.evidence().is_some();
        let result = and(r1, r2);

        prop_assert_eq!(result.evidence().is_some(), both_proved);
    }

    /// Property: Failed disjunctions add up their shrink counts
    #[test]
    fn prop_or_sums_shrinks(r1 in failure(), r2 in failure()) {
        let expected = r1.shrinks() + r2.shrinks();

        prop_assert_eq!(or(r1, r2).shrinks(), expected);
    }

    /// Property: Transport never changes the outcome of a result
    #[test]
    fn prop_transport_preserves_status(r in test_result(), t in transport()) {
        let status = r.status();
        prop_assert_eq!(imp(&t, r).status(), status);
    }

    /// Property: A weakening never carries evidence across
    #[test]
    fn prop_weakening_drops_evidence(r in test_result(), rule in "[a-z]{1,8}") {
        let result = imp(&Transport::Weakening(rule), r);
        prop_assert!(result.evidence().is_none());
    }

    /// Property: An equivalence keeps evidence exactly when it was present
    #[test]
    fn prop_equivalence_keeps_evidence(r in test_result(), rule in "[a-z]{1,8}") {
        let proved = r.evidence().is_some();
        prop_assert_eq!(iff(rule, r).evidence().is_some(), proved);
    }

    /// Property: Labels are prepended, outermost first
    #[test]
    fn prop_add_info_prepends(r in test_result(), l in label(), t in transport()) {
        prop_assume!(!r.is_gave_up());
        let mut expected = vec![l.clone()];
        expected.extend(r.labels().iter().cloned());

        let result = add_info(l, &t, r);
        prop_assert_eq!(result.labels(), expected.as_slice());
    }

    /// Property: Shrink counts only accumulate on failures
    #[test]
    fn prop_add_shrinks_accumulates(r in test_result(), n in 0usize..50) {
        let before = r.shrinks();
        let failed = r.is_failure();
        let result = add_shrinks(n, r);

        if failed {
            prop_assert_eq!(result.shrinks(), before + n);
        } else {
            prop_assert_eq!(result.shrinks(), 0);
        }
    }
}

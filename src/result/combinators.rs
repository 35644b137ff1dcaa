// Copyright (c) 2025 - Cowboy AI, Inc.
//! Result Combinators
//!
//! Pure functions for composing and decorating test results. None of them
//! perform I/O and all of them are total.
//!
//! # Available Combinators
//!
//! ## Evidence
//! - `combine` - Apply optional evidence to an optional evidence transformer
//!
//! ## Connectives
//! - `and` - Result of a conjunction from the results of its conjuncts
//! - `or` - Result of a disjunction from the results of its disjuncts
//!
//! ## Transport
//! - `imp` - Move a result across an implication
//! - `iff` - Move a result across an equivalence
//!
//! ## Decoration
//! - `add_info` - Transport and prepend a label
//! - `add_var_info` - Transport and prepend a `var := value` label
//! - `add_shrinks` - Count shrink steps on a failure
//!
//! # Examples
//!
//! ```rust,ignore
//! use cim_propcheck::result::*;
//!
//! let left = TestResult::proved(Certificate::axiom("decide: 1 < 2"));
//! let right = TestResult::refuted(Certificate::axiom("decide: 3 < 2"), "issue: 3 < 2 does not hold");
//!
//! assert!(and(left.clone(), right.clone()).is_failure());
//! assert!(or(left, right).is_success());
//! ```

use super::{Certificate, TestResult};
use std::fmt::Debug;

/// How a result moves from a proposition `P` to a proposition `Q`
///
/// Every transport knows `Q → P`, which turns a refutation of `P` into a
/// refutation of `Q`. Only an equivalence also knows `P → Q` and can carry
/// success evidence across.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// `P` and `Q` are the same proposition
    Identity,

    /// `P ↔ Q` by the named rule
    Equivalence(String),

    /// Only `Q → P` by the named rule; evidence for `P` is dropped
    Weakening(String),
}

impl Transport {
    fn converse(&self) -> Option<impl FnOnce(Certificate) -> Certificate + '_> {
        let step = match self {
            Transport::Identity => None,
            Transport::Equivalence(rule) => Some(rule.as_str()),
            Transport::Weakening(_) => return None,
        };
        Some(move |cert: Certificate| match step {
            Some(rule) => cert.via(rule),
            None => cert,
        })
    }

    fn contrapositive(&self, refutation: Certificate) -> Certificate {
        match self {
            Transport::Identity => refutation,
            Transport::Equivalence(rule) | Transport::Weakening(rule) => {
                refutation.via(format!("contrapositive of {rule}"))
            }
        }
    }
}

/// Apply optional evidence to an optional evidence transformer
///
/// Returns `Some` only when both inputs are present. Evidence is never
/// fabricated for a branch that was not proved.
///
/// # Arguments
///
/// * `f` - Transformer from evidence for `A` to evidence for `B`
/// * `x` - Evidence for `A`
pub fn combine<A, B, F>(f: Option<F>, x: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    match (f, x) {
        (Some(f), Some(x)) => Some(f(x)),
        _ => None,
    }
}

/// Result of `P ∧ Q` from the results of `P` and `Q`
///
/// A failure in either operand dominates (the left one when both fail), then
/// `GaveUp`. Two successes concatenate their labels and combine evidence.
pub fn and(r1: TestResult, r2: TestResult) -> TestResult {
    match (r1, r2) {
        (failure @ TestResult::Failure { .. }, _) => failure,
        (_, failure @ TestResult::Failure { .. }) => failure,
        (TestResult::GaveUp, _) | (_, TestResult::GaveUp) => TestResult::GaveUp,
        (
            TestResult::Success {
                evidence: e1,
                labels: mut l1,
            },
            TestResult::Success {
                evidence: e2,
                labels: l2,
            },
        ) => {
            l1.extend(l2);
            TestResult::Success {
                evidence: combine(e1.map(|a| move |b| Certificate::conjoin(a, b)), e2),
                labels: l1,
            }
        }
    }
}

/// Result of `P ∨ Q` from the results of `P` and `Q`
///
/// Dual of [`and`]: a success in either operand dominates, then `GaveUp`. Two
/// failures conjoin their refutations and add up their shrink counts.
pub fn or(r1: TestResult, r2: TestResult) -> TestResult {
    match (r1, r2) {
        (success @ TestResult::Success { .. }, _) => success,
        (_, success @ TestResult::Success { .. }) => success,
        (TestResult::GaveUp, _) | (_, TestResult::GaveUp) => TestResult::GaveUp,
        (
            TestResult::Failure {
                refutation: c1,
                labels: mut l1,
                shrinks: n1,
            },
            TestResult::Failure {
                refutation: c2,
                labels: l2,
                shrinks: n2,
            },
        ) => {
            l1.extend(l2);
            TestResult::Failure {
                refutation: c1.conjoin(c2),
                labels: l1,
                shrinks: n1 + n2,
            }
        }
    }
}

/// Move a result for `P` to a result for `Q` across `transport`
///
/// Used whenever a tester decides `Q` by testing an equivalent or weaker
/// proposition `P`.
pub fn imp(transport: &Transport, result: TestResult) -> TestResult {
    match result {
        TestResult::Success { evidence, labels } => TestResult::Success {
            evidence: combine(transport.converse(), evidence),
            labels,
        },
        TestResult::GaveUp => TestResult::GaveUp,
        TestResult::Failure {
            refutation,
            labels,
            shrinks,
        } => TestResult::Failure {
            refutation: transport.contrapositive(refutation),
            labels,
            shrinks,
        },
    }
}

/// Move a result across the equivalence named `rule`
pub fn iff(rule: impl Into<String>, result: TestResult) -> TestResult {
    imp(&Transport::Equivalence(rule.into()), result)
}

/// Transport a result and prepend `label` to its bindings
///
/// # Examples
///
/// ```rust,ignore
/// let r = add_info("guard: x > 10", &Transport::Identity, TestResult::passed());
/// assert_eq!(r.labels(), &["guard: x > 10"]);
/// ```
pub fn add_info(label: impl Into<String>, transport: &Transport, result: TestResult) -> TestResult {
    match imp(transport, result) {
        TestResult::Success {
            evidence,
            mut labels,
        } => {
            labels.insert(0, label.into());
            TestResult::Success { evidence, labels }
        }
        TestResult::GaveUp => TestResult::GaveUp,
        TestResult::Failure {
            refutation,
            mut labels,
            shrinks,
        } => {
            labels.insert(0, label.into());
            TestResult::Failure {
                refutation,
                labels,
                shrinks,
            }
        }
    }
}

/// Transport a result and record the binding `var := value`
pub fn add_var_info<T: Debug + ?Sized>(
    var: &str,
    value: &T,
    transport: &Transport,
    result: TestResult,
) -> TestResult {
    add_info(format!("{var} := {value:?}"), transport, result)
}

/// Add `n` shrink steps to a failure; other results are unchanged
pub fn add_shrinks(n: usize, result: TestResult) -> TestResult {
    match result {
        TestResult::Failure {
            refutation,
            labels,
            shrinks,
        } => TestResult::Failure {
            refutation,
            labels,
            shrinks: shrinks + n,
        },
        other => other,
    }
}

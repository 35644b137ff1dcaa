// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tester Dispatch
//!
//! [`run_prop`] selects, for each proposition shape, the strategy that tests
//! it and recursively delegates to the strategies of its parts.
//!
//! # Strategies
//!
//! | Shape | Strategy |
//! |---|---|
//! | `Decide` | evaluate once, no randomness |
//! | `Not` | test the operand and flip only what the evidence supports |
//! | `And` | test both conjuncts, combine with `and` |
//! | `Or` | test the left disjunct, the right one only if the left did not succeed |
//! | `Iff` | test `(p ∧ q) ∨ (¬p ∧ ¬q)` and transport back |
//! | `ForAll` | sample, test, shrink on failure |
//! | `Guarded` | test the body if the guard holds, otherwise discard |
//! | `Unused` | test the body directly with a fixed witness |
//! | `Subtype` | quantify over the subtype sampler, annotate the guard |
//! | `ForAllTypes` | instantiate at representative types |
//!
//! Strategies keep no state between calls: rerunning with the same
//! configuration and generator state reproduces the result.

pub mod quantifier;

use crate::config::Configuration;
use crate::gen::Gen;
use crate::prop::{Atom, Guarded, Prop, TypeQuantifier, Unused};
use crate::result::{add_info, and, iff, imp, or, Certificate, TestResult, Transport};
use crate::trace;

/// Test `prop` once at the generator's current size
///
/// # Arguments
///
/// * `prop` - Proposition to test
/// * `cfg` - Trace toggles and limits
/// * `gen` - Random source and size
/// * `minimize` - Whether quantifiers should shrink a failing sample
pub fn run_prop(prop: &Prop, cfg: &Configuration, gen: &mut Gen, minimize: bool) -> TestResult {
    match prop {
        Prop::Decide(atom) => decide(atom),
        Prop::Not(p) => negate(p, cfg, gen, minimize),
        Prop::And(p, q) => {
            let left = run_prop(p, cfg, gen, minimize);
            let right = run_prop(q, cfg, gen, minimize);
            and(left, right)
        }
        Prop::Or(p, q) => {
            let left = run_prop(p, cfg, gen, minimize);
            if left.is_success() {
                return left;
            }
            let right = run_prop(q, cfg, gen, minimize);
            or(left, right)
        }
        Prop::Iff(p, q) => {
            let (p, q) = (&**p, &**q);
            let rewritten = Prop::or(
                Prop::and(p.clone(), q.clone()),
                Prop::and(Prop::not(p.clone()), Prop::not(q.clone())),
            );
            iff(
                "(p ↔ q) ↔ (p ∧ q) ∨ (¬p ∧ ¬q)",
                run_prop(&rewritten, cfg, gen, minimize),
            )
        }
        Prop::ForAll(quantifier) => quantifier.run(cfg, gen, minimize),
        Prop::Guarded(guarded) => guard(guarded, cfg, gen, minimize),
        Prop::Unused(unused) => unused_binder(unused, cfg, gen, minimize),
        Prop::Subtype(quantifier) => iff(
            format!("(∀ {0}, P {0} → β {0}) ↔ ∀ {0} : subtype P, β {0}", quantifier.var()),
            quantifier.run(cfg, gen, minimize),
        ),
        Prop::ForAllTypes(family) => for_all_types(family, cfg, gen, minimize),
    }
}

fn decide(atom: &Atom) -> TestResult {
    if atom.holds() {
        TestResult::proved(Certificate::axiom(format!("decide: {}", atom.text())))
    } else {
        TestResult::refuted(
            Certificate::axiom(format!("decide: ¬({})", atom.text())),
            format!("issue: {} does not hold", atom.text()),
        )
    }
}

/// A sampled success of the operand does not refute `¬p`, so it becomes
/// `GaveUp`; only a certified success does.
fn negate(p: &Prop, cfg: &Configuration, gen: &mut Gen, minimize: bool) -> TestResult {
    match run_prop(p, cfg, gen, minimize) {
        TestResult::Failure {
            refutation, labels, ..
        } => TestResult::Success {
            evidence: Some(refutation.via("negation introduction")),
            labels,
        },
        TestResult::Success {
            evidence: Some(proof),
            mut labels,
        } => {
            labels.push(format!("issue: {p} holds"));
            TestResult::Failure {
                refutation: proof.via("negation elimination"),
                labels,
                shrinks: 0,
            }
        }
        TestResult::Success { evidence: None, .. } | TestResult::GaveUp => TestResult::GaveUp,
    }
}

fn guard(guarded: &Guarded, cfg: &Configuration, gen: &mut Gen, minimize: bool) -> TestResult {
    let text = guarded.guard.text();
    if guarded.guard.holds() {
        let result = run_prop(&(guarded.body)(), cfg, gen, minimize);
        add_info(
            format!("guard: {text}"),
            &Transport::Equivalence(format!("guard {text} holds")),
            result,
        )
    } else {
        trace::emit(cfg.trace_discarded || cfg.trace_successes, || {
            format!("discard: Guard {text} does not hold")
        });
        TestResult::GaveUp
    }
}

fn unused_binder(unused: &Unused, cfg: &Configuration, gen: &mut Gen, minimize: bool) -> TestResult {
    trace::emit(cfg.trace_discarded || cfg.trace_successes, || {
        format!("{} is unused", unused.var)
    });

    let result = run_prop(&unused.body, cfg, gen, minimize);
    let result = add_info(
        format!("{} is irrelevant (unused)", unused.var),
        &Transport::Identity,
        result,
    );
    imp(
        &Transport::Equivalence(format!(
            "{} instantiated with witness {}",
            unused.var, unused.witness
        )),
        result,
    )
}

/// Stops at the first representative that does not succeed
fn for_all_types(
    family: &TypeQuantifier,
    cfg: &Configuration,
    gen: &mut Gen,
    minimize: bool,
) -> TestResult {
    let mut combined: Option<TestResult> = None;

    for (type_name, instance) in &family.instances {
        let result = run_prop(&instance(), cfg, gen, minimize);
        let result = add_info(
            format!("{} := {type_name}", family.var),
            &Transport::Weakening(format!("instantiate {} := {type_name}", family.var)),
            result,
        );
        let stop = !result.is_success();
        combined = Some(match combined {
            None => result,
            Some(previous) => and(previous, result),
        });
        if stop {
            break;
        }
    }

    combined.unwrap_or(TestResult::GaveUp)
}

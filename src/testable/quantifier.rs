// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bounded-universal testing strategy
//!
//! Draws one sample for the bound variable, tests the body at that value and,
//! when the body fails and minimization was requested, hands the witness to
//! the shrink search. The result is decorated with the final binding.

use std::fmt::Debug;

use super::run_prop;
use crate::config::Configuration;
use crate::gen::Gen;
use crate::prop::Prop;
use crate::result::{add_info, add_var_info, TestResult, Transport};
use crate::sampleable::Sampleable;
use crate::shrink;
use crate::trace;

/// Type-erased universally quantified proposition
pub trait Quantifier {
    /// Display name of the bound variable
    fn var(&self) -> &str;

    /// Test the proposition once at the generator's current size
    fn run(&self, cfg: &Configuration, gen: &mut Gen, minimize: bool) -> TestResult;
}

/// `∀ var, body var` over the values of a sampler
pub(crate) struct ForAllBinder<S, F> {
    var: String,
    sampler: S,
    body: F,
}

impl<S, F> ForAllBinder<S, F> {
    pub(crate) fn new(var: String, sampler: S, body: F) -> Self {
        Self { var, sampler, body }
    }
}

impl<S, F> Quantifier for ForAllBinder<S, F>
where
    S: Sampleable,
    S::Value: Debug,
    F: Fn(&S::Value) -> Prop,
{
    fn var(&self) -> &str {
        &self.var
    }

    fn run(&self, cfg: &Configuration, gen: &mut Gen, minimize: bool) -> TestResult {
        let body = |value: &S::Value, cfg: &Configuration, gen: &mut Gen, minimize: bool| {
            run_prop(&(self.body)(value), cfg, gen, minimize)
        };
        test_bound(&self.var, &self.sampler, &body, cfg, gen, minimize)
    }
}

/// `∀ var, P var → body var` over a sampler that only yields values
/// satisfying `P`
pub(crate) struct SubtypeBinder<S, G, F> {
    var: String,
    sampler: S,
    guard: G,
    body: F,
}

impl<S, G, F> SubtypeBinder<S, G, F> {
    pub(crate) fn new(var: String, sampler: S, guard: G, body: F) -> Self {
        Self {
            var,
            sampler,
            guard,
            body,
        }
    }
}

impl<S, G, F> Quantifier for SubtypeBinder<S, G, F>
where
    S: Sampleable,
    S::Value: Debug,
    G: Fn(&S::Value) -> String,
    F: Fn(&S::Value) -> Prop,
{
    fn var(&self) -> &str {
        &self.var
    }

    fn run(&self, cfg: &Configuration, gen: &mut Gen, minimize: bool) -> TestResult {
        let body = |value: &S::Value, cfg: &Configuration, gen: &mut Gen, minimize: bool| {
            let result = run_prop(&(self.body)(value), cfg, gen, minimize);
            let guard = (self.guard)(value);
            add_info(
                format!("guard: {guard} (by construction)"),
                &Transport::Equivalence(format!("{guard} holds by construction")),
                result,
            )
        };
        test_bound(&self.var, &self.sampler, &body, cfg, gen, minimize)
    }
}

/// Sample `var`, test `body` at it, shrink on failure, record the binding
///
/// A passing sample says nothing about other values, so the binding is
/// transported as a weakening: evidence is dropped while a refutation of the
/// body refutes the quantified statement.
pub(crate) fn test_bound<S, T>(
    var: &str,
    sampler: &S,
    body: &T,
    cfg: &Configuration,
    gen: &mut Gen,
    minimize: bool,
) -> TestResult
where
    S: Sampleable,
    S::Value: Debug,
    T: Fn(&S::Value, &Configuration, &mut Gen, bool) -> TestResult,
{
    let proxy = sampler.sample(gen);
    trace::emit(cfg.trace_successes || cfg.trace_discarded, || {
        format!("{var} := {proxy:?}")
    });

    let result = body(&sampler.interpret(&proxy), cfg, gen, minimize);

    let (witness, result) = if result.is_failure() {
        trace::emit(cfg.trace_successes, || {
            format!("{var} := {proxy:?} is a failure")
        });
        if minimize {
            shrink::minimize(var, sampler, body, cfg, gen, proxy, result)
        } else {
            (proxy, result)
        }
    } else {
        (proxy, result)
    };

    let value = sampler.interpret(&witness);
    let transport = Transport::Weakening(format!("specialise {var} := {value:?}"));
    add_var_info(var, &value, &transport, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampleable::NatSampler;

    #[test]
    fn test_bound_labels_binding_and_drops_evidence() {
        let cfg = Configuration::default();
        let mut gen = Gen::from_seed(4);
        gen.set_size(20);

        let binder = ForAllBinder::new("x".to_string(), NatSampler, |&x: &u64| {
            Prop::decide(format!("{x} + 0 = {x}"), x + 0 == x)
        });
        let result = binder.run(&cfg, &mut gen, true);

        assert!(result.is_success());
        assert_eq!(result.evidence(), None);
        assert_eq!(result.labels().len(), 1);
        assert!(result.labels()[0].starts_with("x := "));
    }

    #[test]
    fn test_bound_without_minimize_keeps_first_witness() {
        let cfg = Configuration::default();
        let mut gen = Gen::from_seed(4);
        gen.set_size(0);

        let binder = ForAllBinder::new("x".to_string(), NatSampler, |&x: &u64| {
            Prop::decide(format!("{x} > 0"), x > 0)
        });
        let result = binder.run(&cfg, &mut gen, false);

        assert!(result.is_failure());
        assert_eq!(result.shrinks(), 0);
        assert_eq!(result.labels()[0], "x := 0");
        assert_eq!(result.labels()[1], "issue: 0 > 0 does not hold");
    }

    #[test]
    fn test_subtype_annotates_guard() {
        let cfg = Configuration::default();
        let mut gen = Gen::from_seed(8);
        gen.set_size(30);

        let binder = SubtypeBinder::new(
            "x".to_string(),
            NatSampler.map(|n: u64| n + 11),
            |x: &u64| format!("{x} > 10"),
            |&x: &u64| Prop::decide(format!("{x} > 5"), x > 5),
        );
        let result = binder.run(&cfg, &mut gen, true);

        assert!(result.is_success());
        assert!(result.labels()[1].ends_with("(by construction)"));
        assert!(result.labels()[1].starts_with("guard: "));
    }
}

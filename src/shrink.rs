// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shrink Search
//!
//! Given a failing sample, look for a smaller one that still fails.
//!
//! # Policy
//!
//! Candidates are tried in the order the sampler returns them. The first
//! candidate that still fails is dived into depth-first, and the search only
//! falls back to that candidate when nothing below it fails:
//!
//! ```text
//! x ──► [c1, c2, c3]        c1 passes, c2 fails
//!            │
//!            c2 ──► [d1, d2] d1 fails
//!                     │
//!                     d1 ──► []   nothing smaller: witness d1, 2 shrinks
//! ```
//!
//! Each candidate is strictly smaller than its parent by the sampler's
//! measure, which bounds the search by the depth of that measure. Candidate
//! checks run with minimization off, so no nested shrink search is started
//! while evaluating a candidate.

use crate::config::Configuration;
use crate::gen::Gen;
use crate::result::{add_shrinks, TestResult};
use crate::sampleable::Sampleable;
use crate::trace;

/// Shrink a failing witness of `body`
///
/// Returns the deepest failing witness reachable from `proxy` together with
/// its result, or `proxy` and `result` unchanged when no candidate fails.
///
/// # Arguments
///
/// * `var` - Name of the bound variable, for trace lines
/// * `sampler` - Source of shrink candidates
/// * `body` - Test of the quantified body at a value
/// * `proxy` - Failing sample
/// * `result` - Failure observed at `proxy`
pub fn minimize<S, T>(
    var: &str,
    sampler: &S,
    body: &T,
    cfg: &Configuration,
    gen: &mut Gen,
    proxy: S::Proxy,
    result: TestResult,
) -> (S::Proxy, TestResult)
where
    S: Sampleable,
    T: Fn(&S::Value, &Configuration, &mut Gen, bool) -> TestResult,
{
    trace::emit(cfg.trace_shrink, || String::from("Shrink"));
    trace::emit(cfg.trace_shrink, || {
        format!("Attempting to shrink {var} := {proxy:?}")
    });

    match minimize_from(var, sampler, body, cfg, gen, &proxy, 0) {
        Some(smaller) => smaller,
        None => (proxy, result),
    }
}

fn minimize_from<S, T>(
    var: &str,
    sampler: &S,
    body: &T,
    cfg: &Configuration,
    gen: &mut Gen,
    proxy: &S::Proxy,
    depth: usize,
) -> Option<(S::Proxy, TestResult)>
where
    S: Sampleable,
    T: Fn(&S::Value, &Configuration, &mut Gen, bool) -> TestResult,
{
    let candidates = sampler.shrink(proxy);
    trace::emit(cfg.trace_shrink_candidates, || {
        format!("Candidates for {var} := {proxy:?}:\n  {candidates:?}")
    });

    for candidate in candidates {
        trace::emit(cfg.trace_shrink_candidates, || {
            format!("Trying {var} := {candidate:?}")
        });

        let result = body(&sampler.interpret(&candidate), cfg, gen, false);
        if result.is_failure() {
            trace::emit(cfg.trace_shrink, || {
                format!("{var} shrunk to {candidate:?} from {proxy:?}")
            });
            return minimize_from(var, sampler, body, cfg, gen, &candidate, depth + 1)
                .or_else(|| Some((candidate, add_shrinks(depth + 1, result))));
        }
    }

    trace::emit(cfg.trace_shrink, || {
        format!("No shrinking possible for {var} := {proxy:?}")
    });
    None
}

/// Shrink `start` against a plain predicate, returning the least failing
/// value found and the number of shrinking steps taken
///
/// `start` is expected to satisfy `fails`.
pub fn shrink_value<S, P>(sampler: &S, start: S::Proxy, fails: P) -> (S::Value, usize)
where
    S: Sampleable,
    P: Fn(&S::Value) -> bool,
{
    let body = |value: &S::Value, _: &Configuration, _: &mut Gen, _: bool| {
        if fails(value) {
            TestResult::refuted(crate::result::Certificate::axiom("predicate"), "fails")
        } else {
            TestResult::passed()
        }
    };
    let cfg = Configuration::default();
    let mut gen = Gen::from_seed(0);
    let initial = body(&sampler.interpret(&start), &cfg, &mut gen, false);
    let (proxy, result) = minimize("value", sampler, &body, &cfg, &mut gen, start, initial);
    (sampler.interpret(&proxy), result.shrinks())
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-based testing for the Composable Information Machine
//!
//! Propositions over universally quantified variables are tested by
//! generating random instances, evaluating the proposition and, on failure,
//! shrinking the failing instance toward a minimal counterexample.
//!
//! ```rust,ignore
//! use cim_propcheck::{check, Configuration, Prop};
//!
//! let prop = Prop::for_all::<u64>("x", |&x| Prop::decide(format!("{x} + 0 = {x}"), x + 0 == x));
//! let summary = check(&prop, &Configuration::default())?;
//! ```
//!
//! Modules, leaves first: [`gen`], [`sampleable`], [`result`], [`prop`],
//! [`testable`], [`shrink`], [`runner`], with [`config`], [`export`] and
//! [`errors`] alongside.

pub mod config;
pub mod errors;
pub mod export;
pub mod gen;
pub mod prop;
pub mod result;
pub mod runner;
pub mod sampleable;
pub mod shrink;
pub mod testable;

mod trace;

// Re-export commonly used types
pub use config::Configuration;
pub use errors::{PropCheckError, PropCheckResult};
pub use export::{Observation, ObservationLog};
pub use gen::Gen;
pub use prop::{Atom, Polymorphic, Prop};
pub use result::{Certificate, TestResult, Transport, TrialStatus};
pub use runner::{check, run_suite, SuiteReport, SuiteSummary, TrialRecord};
pub use sampleable::{Arbitrary, Sampleable};
pub use testable::run_prop;

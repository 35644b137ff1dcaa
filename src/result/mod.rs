// Copyright (c) 2025 - Cowboy AI, Inc.
//! Evidence-Carrying Test Results
//!
//! Testing a proposition yields one of three outcomes:
//!
//! ```text
//! TestResult
//!   ├── Success  (optional evidence, bindings)
//!   ├── GaveUp   (no well-formed sample)
//!   └── Failure  (refutation, bindings, shrink count)
//! ```
//!
//! Instead of collapsing to a boolean, each outcome threads a `Certificate`:
//! evidence on success when a single deterministic check sufficed, and a
//! refutation on failure. The engine never inspects certificates; it only
//! builds and composes them through the combinators in [`combinators`].
//!
//! # Label Ordering
//!
//! Every quantifier layer prepends the display string of the value it bound,
//! so labels read outermost-quantifier-first once the result has travelled
//! back up the recursive dispatch.

pub mod combinators;

pub use combinators::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque justification attached to a result
///
/// A certificate is an ordered chain of justification steps. The engine
/// extends and conjoins chains but never branches on their contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    steps: Vec<String>,
}

impl Certificate {
    /// Certificate resting on a single primitive fact
    pub fn axiom(step: impl Into<String>) -> Self {
        Self {
            steps: vec![step.into()],
        }
    }

    /// Extend the chain with one more inference step
    pub fn via(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Join two independent certificates
    pub fn conjoin(mut self, other: Certificate) -> Self {
        self.steps.extend(other.steps);
        self
    }

    /// Justification steps in the order they were recorded
    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.join(" ; "))
    }
}

/// Outcome of testing a proposition once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// The proposition held for the tested bindings
    Success {
        /// Present only when no search was needed
        evidence: Option<Certificate>,
        /// Bound-variable assignments, outermost first
        labels: Vec<String>,
    },

    /// No well-formed sample could be produced
    GaveUp,

    /// The proposition is false for the recorded bindings
    Failure {
        /// Certificate that the proposition does not hold
        refutation: Certificate,
        /// Bound-variable assignments, outermost first
        labels: Vec<String>,
        /// Successful shrink steps taken to reach this witness
        shrinks: usize,
    },
}

/// Status of a trial, as reported in summaries and exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialStatus {
    /// Proposition held
    Passed,
    /// Counterexample found
    Failed,
    /// Every attempt was discarded
    GaveUp,
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialStatus::Passed => write!(f, "passed"),
            TrialStatus::Failed => write!(f, "failed"),
            TrialStatus::GaveUp => write!(f, "gave_up"),
        }
    }
}

impl TestResult {
    /// Success backed by a certificate
    pub fn proved(evidence: Certificate) -> Self {
        TestResult::Success {
            evidence: Some(evidence),
            labels: Vec::new(),
        }
    }

    /// Success observed by sampling, without evidence
    pub fn passed() -> Self {
        TestResult::Success {
            evidence: None,
            labels: Vec::new(),
        }
    }

    /// Failure with a single explanatory label
    pub fn refuted(refutation: Certificate, label: impl Into<String>) -> Self {
        TestResult::Failure {
            refutation,
            labels: vec![label.into()],
            shrinks: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. })
    }

    pub fn is_gave_up(&self) -> bool {
        matches!(self, TestResult::GaveUp)
    }

    /// Evidence of a success, if any
    pub fn evidence(&self) -> Option<&Certificate> {
        match self {
            TestResult::Success { evidence, .. } => evidence.as_ref(),
            _ => None,
        }
    }

    /// Bindings recorded on this result (empty for `GaveUp`)
    pub fn labels(&self) -> &[String] {
        match self {
            TestResult::Success { labels, .. } | TestResult::Failure { labels, .. } => labels,
            TestResult::GaveUp => &[],
        }
    }

    /// Shrink steps taken (zero unless this is a failure)
    pub fn shrinks(&self) -> usize {
        match self {
            TestResult::Failure { shrinks, .. } => *shrinks,
            _ => 0,
        }
    }

    pub fn status(&self) -> TrialStatus {
        match self {
            TestResult::Success { .. } => TrialStatus::Passed,
            TestResult::GaveUp => TrialStatus::GaveUp,
            TestResult::Failure { .. } => TrialStatus::Failed,
        }
    }

    /// One-line description of the bindings, used by the observation log
    pub fn representation(&self) -> String {
        let labels = self.labels();
        if labels.is_empty() {
            String::from("(no bindings)")
        } else {
            labels.join(", ")
        }
    }
}

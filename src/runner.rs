// Copyright (c) 2025 - Cowboy AI, Inc.
//! Suite Runner
//!
//! Runs a proposition for a configured number of trials with a decreasing
//! size schedule, retries trials whose guards keep failing, stops at the
//! first counterexample and turns the outcome into a report.
//!
//! ```text
//! check(prop, cfg)
//!   ├── validate cfg, seed Gen
//!   ├── run_suite ──► trial 0 (size max) ──► trial 1 ──► ... ──► first Failure
//!   │                    └── retry while GaveUp (num_retries attempts)
//!   ├── export observations (log_for_tyche)
//!   └── Ok(SuiteSummary) | Err(Counterexample(report))
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::Configuration;
use crate::errors::{PropCheckError, PropCheckResult};
use crate::export::ObservationLog;
use crate::gen::Gen;
use crate::prop::Prop;
use crate::result::{TestResult, TrialStatus};
use crate::testable::run_prop;
use crate::trace;

/// Banner printed above a counterexample
pub const COUNTEREXAMPLE_BANNER: &str = "Found a counterexample!";

/// Message returned for a counterexample when `quiet` is set
pub const QUIET_COUNTEREXAMPLE: &str = "Found a counterexample";

/// Size used for trial `i` of `num_inst`
///
/// Decreases from just under `max_size` for the first trial to `0` for the
/// last. `num_inst` must be positive.
pub fn size_for_trial(i: usize, num_inst: usize, max_size: usize) -> usize {
    let remaining = num_inst.saturating_sub(i).saturating_sub(1) as u128;
    let size = remaining * max_size as u128 / num_inst.max(1) as u128;
    usize::try_from(size).unwrap_or(usize::MAX)
}

/// Outcome of one trial
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    /// Zero-based trial index
    pub index: usize,

    /// Size parameter the trial ran at
    pub size: usize,

    /// Number of attempts, more than one only when guards were not met
    pub attempts: usize,

    pub result: TestResult,

    pub finished_at: DateTime<Utc>,
}

impl TrialRecord {
    pub fn status(&self) -> TrialStatus {
        self.result.status()
    }
}

/// Trials of one suite run in execution order
///
/// When the suite found a counterexample it is the last trial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteReport {
    pub trials: Vec<TrialRecord>,
}

impl SuiteReport {
    /// Trial that refuted the proposition
    pub fn failure(&self) -> Option<&TrialRecord> {
        self.trials.last().filter(|t| t.result.is_failure())
    }

    pub fn passed_count(&self) -> usize {
        self.count(TrialStatus::Passed)
    }

    pub fn gave_up_count(&self) -> usize {
        self.count(TrialStatus::GaveUp)
    }

    fn count(&self, status: TrialStatus) -> usize {
        self.trials.iter().filter(|t| t.status() == status).count()
    }

    /// Counts for a run that found no counterexample
    pub fn summary(&self, seed: u64) -> SuiteSummary {
        SuiteSummary {
            trials: self.trials.len(),
            passed: self.passed_count(),
            gave_up: self.gave_up_count(),
            seed,
        }
    }
}

/// Result of a successful [`check`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub trials: usize,
    pub passed: usize,
    pub gave_up: usize,

    /// Seed that replays this run through [`Configuration::with_seed`]
    pub seed: u64,
}

/// Run every trial of `prop`, stopping at the first failure
pub fn run_suite(prop: &Prop, cfg: &Configuration, gen: &mut Gen) -> SuiteReport {
    let mut report = SuiteReport::default();

    for index in 0..cfg.num_inst {
        let size = size_for_trial(index, cfg.num_inst, cfg.max_size);
        gen.set_size(size);
        trace::emit(cfg.trace_successes, || String::from("New sample"));

        let (attempts, result) = run_with_retries(prop, cfg, gen);
        let failed = result.is_failure();
        report.trials.push(TrialRecord {
            index,
            size,
            attempts,
            result,
            finished_at: Utc::now(),
        });

        if failed {
            break;
        }
    }

    report
}

/// Test `prop` once, retrying with fresh samples while it gives up
///
/// Returns the number of attempts made and the last result.
pub fn run_with_retries(prop: &Prop, cfg: &Configuration, gen: &mut Gen) -> (usize, TestResult) {
    let budget = cfg.num_retries.max(1);
    let mut attempts = 0;

    loop {
        attempts += 1;
        let result = run_prop(prop, cfg, gen, true);
        if !result.is_gave_up() || attempts >= budget {
            return (attempts, result);
        }
        if attempts == 1 {
            trace::emit(cfg.trace_discarded, || {
                format!("Retrying up to {} times until guards hold", budget - 1)
            });
        }
    }
}

/// Human-readable failure report
pub fn format_failure(banner: &str, labels: &[String], shrinks: usize) -> String {
    [
        String::from("\n==================="),
        banner.to_string(),
        labels.join("\n"),
        format!("({shrinks} shrinks)"),
        String::from("-------------------"),
    ]
    .join("\n")
}

/// Check `prop` under `cfg`
///
/// Returns the run summary when no counterexample was found and
/// [`PropCheckError::Counterexample`] with the report otherwise. A
/// counterexample is reported even when the observation log cannot be
/// written.
///
/// # Errors
///
/// Also fails when the configuration is invalid, or when the observation log
/// cannot be written for a run that found no counterexample.
pub fn check(prop: &Prop, cfg: &Configuration) -> PropCheckResult<SuiteSummary> {
    cfg.validate()?;

    let seed = cfg.random_seed.unwrap_or_else(rand::random);
    debug!(seed, num_inst = cfg.num_inst, max_size = cfg.max_size, "Checking {}", prop);
    let mut gen = Gen::from_seed(seed);

    let report = run_suite(prop, cfg, &mut gen);

    let exported = if cfg.log_for_tyche {
        export(prop, cfg, &report)
    } else {
        Ok(())
    };

    let gave_up = report.gave_up_count();
    if gave_up > 0 {
        warn!(
            "Gave up after failing to generate values that fulfill the preconditions {} times.",
            gave_up
        );
    }

    match report.failure() {
        Some(trial) => {
            warn!(seed, trial = trial.index, "Counterexample found; replay with this seed");
            let message = if cfg.quiet {
                QUIET_COUNTEREXAMPLE.to_string()
            } else {
                format_failure(
                    COUNTEREXAMPLE_BANNER,
                    trial.result.labels(),
                    trial.result.shrinks(),
                )
            };
            Err(PropCheckError::Counterexample(message))
        }
        None => {
            exported?;
            if !cfg.quiet {
                info!("No counterexample found");
            }
            Ok(report.summary(seed))
        }
    }
}

fn export(prop: &Prop, cfg: &Configuration, report: &SuiteReport) -> PropCheckResult<()> {
    let log = ObservationLog::new(&cfg.export_path);
    match log.append(prop, report) {
        Ok(written) => {
            debug!(
                run_id = %log.run_id(),
                path = %cfg.export_path.display(),
                "Exported {} observations",
                written
            );
            Ok(())
        }
        Err(e) => {
            error!(
                path = %cfg.export_path.display(),
                "Failed to export observations: {}",
                e
            );
            Err(e)
        }
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Structured Observation Log
//!
//! When `log_for_tyche` is set, every trial of a run is appended to a JSON
//! Lines file, one object per trial:
//!
//! ```json
//! {"type":"test_case","run_id":"0192…","property":"∀ x, …","status":"passed",
//!  "representation":"x := 3","timestamp":"2025-01-01T00:00:00Z",
//!  "trial":0,"size":99,"attempts":1}
//! ```
//!
//! Records of one run share a `run_id` (UUID v7), so several runs can append
//! to the same file and still be told apart.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PropCheckResult;
use crate::prop::Prop;
use crate::result::TrialStatus;
use crate::runner::SuiteReport;

/// Record kind written for each trial
pub const TEST_CASE: &str = "test_case";

/// One trial as written to the observation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "type")]
    pub kind: String,
    pub run_id: Uuid,
    pub property: String,
    pub status: TrialStatus,
    pub representation: String,
    pub timestamp: DateTime<Utc>,
    pub trial: usize,
    pub size: usize,
    pub attempts: usize,
}

/// Append-only JSON Lines log for one run
#[derive(Debug, Clone)]
pub struct ObservationLog {
    path: PathBuf,
    run_id: Uuid,
}

impl ObservationLog {
    /// Log for a new run writing to `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            run_id: Uuid::now_v7(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Observations for every trial of `report`, in execution order
    pub fn observations(&self, prop: &Prop, report: &SuiteReport) -> Vec<Observation> {
        let property = prop.to_string();
        report
            .trials
            .iter()
            .map(|trial| Observation {
                kind: TEST_CASE.to_string(),
                run_id: self.run_id,
                property: property.clone(),
                status: trial.status(),
                representation: trial.result.representation(),
                timestamp: trial.finished_at,
                trial: trial.index,
                size: trial.size,
                attempts: trial.attempts,
            })
            .collect()
    }

    /// Append the observations of `report`, creating the file and its parent
    /// directory when missing
    ///
    /// Returns the number of records written.
    pub fn append(&self, prop: &Prop, report: &SuiteReport) -> PropCheckResult<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        let observations = self.observations(prop, report);
        for observation in &observations {
            serde_json::to_writer(&mut writer, observation)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        Ok(observations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::gen::Gen;
    use crate::runner::run_suite;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn below_five() -> Prop {
        Prop::for_all::<u64>("x", |&x| Prop::decide(format!("{x} < 5"), x < 5))
    }

    #[test]
    fn test_observations_follow_trials() {
        let cfg = Configuration::default().with_num_inst(10).with_max_size(3);
        let mut gen = Gen::from_seed(11);
        let report = run_suite(&below_five(), &cfg, &mut gen);
        let log = ObservationLog::new("unused.jsonl");

        let observations = log.observations(&below_five(), &report);
        assert_eq!(observations.len(), 10);
        for (i, obs) in observations.iter().enumerate() {
            assert_eq!(obs.trial, i);
            assert_eq!(obs.kind, TEST_CASE);
            assert_eq!(obs.status, TrialStatus::Passed);
            assert_eq!(obs.property, "∀ x, …");
            assert!(obs.representation.starts_with("x := "));
            assert_eq!(obs.run_id, log.run_id());
        }
    }

    #[test]
    fn test_append_writes_one_line_per_trial() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("observations.jsonl");
        let cfg = Configuration::default().with_num_inst(50);
        let mut gen = Gen::from_seed(5);
        let report = run_suite(&below_five(), &cfg, &mut gen);

        let log = ObservationLog::new(&path);
        let written = log.append(&below_five(), &report).unwrap();
        assert_eq!(written, report.trials.len());

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), written);

        let last: serde_json::Value = serde_json::from_str(lines[lines.len() - 1]).unwrap();
        assert_eq!(last["type"], "test_case");
        assert_eq!(last["status"], "failed");
        assert!(last["representation"]
            .as_str()
            .unwrap()
            .contains("x := 5"));
    }

    #[test]
    fn test_append_keeps_earlier_runs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("observations.jsonl");
        let cfg = Configuration::default().with_num_inst(3);
        let prop = Prop::decide("true", true);

        let first = ObservationLog::new(&path);
        let second = ObservationLog::new(&path);
        let mut gen = Gen::from_seed(0);
        first.append(&prop, &run_suite(&prop, &cfg, &mut gen)).unwrap();
        second.append(&prop, &run_suite(&prop, &cfg, &mut gen)).unwrap();

        let records: Vec<Observation> = std::fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 6);
        assert!(records[..3].iter().all(|r| r.run_id == first.run_id()));
        assert!(records[3..].iter().all(|r| r.run_id == second.run_id()));
        assert_ne!(first.run_id(), second.run_id());
    }
}

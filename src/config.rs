// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property checking configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{PropCheckError, PropCheckResult};

/// Fixed location of the structured observation log
pub const DEFAULT_EXPORT_PATH: &str = ".propcheck/observations.jsonl";

/// Configuration for a property checking run
///
/// Constructed once per invocation and read-only afterwards. Every field has
/// a default; the `with_*` methods adjust single fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Number of trials
    pub num_inst: usize,

    /// Upper bound on the size parameter
    pub max_size: usize,

    /// Attempts per trial while the proposition keeps giving up
    pub num_retries: usize,

    /// Trace samples discarded by a guard
    pub trace_discarded: bool,

    /// Trace samples that passed
    pub trace_successes: bool,

    /// Trace shrink steps
    pub trace_shrink: bool,

    /// Trace every shrink candidate that is attempted
    pub trace_shrink_candidates: bool,

    /// Fixed seed for deterministic replay
    pub random_seed: Option<u64>,

    /// Suppress the informational success line and the detailed report
    pub quiet: bool,

    /// Append one JSON line per trial to `export_path`
    pub log_for_tyche: bool,

    /// Destination of the structured observation log
    pub export_path: PathBuf,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            num_inst: 100,
            max_size: 100,
            num_retries: 10,
            trace_discarded: false,
            trace_successes: false,
            trace_shrink: false,
            trace_shrink_candidates: false,
            random_seed: None,
            quiet: false,
            log_for_tyche: false,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl Configuration {
    /// Default configuration with every trace toggle enabled
    pub fn verbose() -> Self {
        Self {
            trace_discarded: true,
            trace_successes: true,
            trace_shrink: true,
            trace_shrink_candidates: true,
            ..Self::default()
        }
    }

    /// Set the number of trials
    pub fn with_num_inst(mut self, num_inst: usize) -> Self {
        self.num_inst = num_inst;
        self
    }

    /// Set the maximum size
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the retry budget per trial
    pub fn with_num_retries(mut self, num_retries: usize) -> Self {
        self.num_retries = num_retries;
        self
    }

    /// Fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Set the quiet flag
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Enable the structured observation log at the given path
    pub fn with_export(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_for_tyche = true;
        self.export_path = path.into();
        self
    }

    /// Check the configuration before a run
    ///
    /// `num_inst` divides the size schedule, so it must be positive.
    pub fn validate(&self) -> PropCheckResult<()> {
        if self.num_inst == 0 {
            return Err(PropCheckError::Configuration(
                "num_inst must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from `PROPCHECK_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> PropCheckResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> PropCheckResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("PROPCHECK_NUM_INST") {
            config.num_inst = parse_var("PROPCHECK_NUM_INST", &v)?;
        }
        if let Some(v) = lookup("PROPCHECK_MAX_SIZE") {
            config.max_size = parse_var("PROPCHECK_MAX_SIZE", &v)?;
        }
        if let Some(v) = lookup("PROPCHECK_NUM_RETRIES") {
            config.num_retries = parse_var("PROPCHECK_NUM_RETRIES", &v)?;
        }
        if let Some(v) = lookup("PROPCHECK_SEED") {
            config.random_seed = Some(parse_var("PROPCHECK_SEED", &v)?);
        }
        if let Some(v) = lookup("PROPCHECK_QUIET") {
            config.quiet = parse_flag("PROPCHECK_QUIET", &v)?;
        }
        if let Some(v) = lookup("PROPCHECK_TRACE") {
            if parse_flag("PROPCHECK_TRACE", &v)? {
                config.trace_discarded = true;
                config.trace_successes = true;
                config.trace_shrink = true;
                config.trace_shrink_candidates = true;
            }
        }
        if let Some(path) = lookup("PROPCHECK_EXPORT") {
            config.log_for_tyche = true;
            if !path.is_empty() {
                config.export_path = PathBuf::from(path);
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> PropCheckResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PropCheckError::Configuration(format!("{key}: invalid value '{value}'")))
}

fn parse_flag(key: &str, value: &str) -> PropCheckResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(PropCheckError::Configuration(format!(
            "{key}: expected a boolean, got '{value}'"
        ))),
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property Checking Demo
//!
//! Checks a small catalogue of propositions and logs the outcome of each,
//! including the counterexample report for the ones that do not hold.
//!
//! Run with: cargo run --bin propcheck-demo [NAME...]
//!
//! Without arguments every property in the catalogue is checked. The run is
//! configured through `PROPCHECK_*` environment variables:
//! - `PROPCHECK_NUM_INST`, `PROPCHECK_MAX_SIZE`, `PROPCHECK_NUM_RETRIES`
//! - `PROPCHECK_SEED` for deterministic replay
//! - `PROPCHECK_TRACE=1` to enable every trace toggle
//! - `PROPCHECK_EXPORT[=path]` to append observations as JSON Lines
//!
//! Trace lines are logged on the `cim_propcheck::trace` target, so
//! `RUST_LOG=cim_propcheck::trace=info` shows them.

use anyhow::{bail, Context, Result};
use cim_propcheck::{check, Arbitrary, Configuration, Polymorphic, Prop};
use tracing::{error, info, warn};

/// Reversing a list twice gives the list back
struct ReverseInvolutive;

impl Polymorphic for ReverseInvolutive {
    fn instantiate<T: Arbitrary>(&self) -> Prop {
        Prop::for_all::<Vec<T>>("xs", |xs| {
            let mut twice = xs.clone();
            twice.reverse();
            twice.reverse();
            Prop::decide("reverse (reverse xs) = xs", &twice == xs)
        })
    }
}

/// Named propositions the demo can check
fn catalogue() -> Vec<(&'static str, Prop)> {
    vec![
        (
            "add_zero",
            Prop::for_all::<u64>("x", |&x| Prop::decide(format!("{x} + 0 = {x}"), x + 0 == x)),
        ),
        (
            "below_five",
            Prop::for_all::<u64>("x", |&x| Prop::decide(format!("{x} < 5"), x < 5)),
        ),
        (
            "guarded",
            Prop::for_all::<u64>("x", |&x| {
                Prop::implies(format!("{x} > 10"), x > 10, move || {
                    Prop::decide(format!("{x} > 5"), x > 5)
                })
            }),
        ),
        (
            "excluded_middle",
            Prop::for_all::<bool>("p", |&p| {
                Prop::or(
                    Prop::decide(format!("{p}"), p),
                    Prop::not(Prop::decide(format!("{p}"), p)),
                )
            }),
        ),
        (
            "reverse_involutive",
            Prop::for_all_types("α", ReverseInvolutive),
        ),
    ]
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Configuration::from_env().context("Failed to load PROPCHECK_* configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - Trials: {}", config.num_inst);
    info!("  - Max size: {}", config.max_size);
    info!("  - Retries: {}", config.num_retries);
    if config.log_for_tyche {
        info!("  - Export: {}", config.export_path.display());
    }

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let selected: Vec<(&str, Prop)> = catalogue()
        .into_iter()
        .filter(|(name, _)| requested.is_empty() || requested.iter().any(|r| r == name))
        .collect();

    if selected.is_empty() {
        let known: Vec<&str> = catalogue().into_iter().map(|(name, _)| name).collect();
        bail!(
            "No property named {:?}; known properties: {}",
            requested,
            known.join(", ")
        );
    }

    let mut refuted = 0;
    for (name, prop) in &selected {
        info!("🔍 Checking {}: {}", name, prop);
        match check(prop, &config) {
            Ok(summary) => info!(
                "✅ {}: {} trials, {} passed, {} gave up (seed {})",
                name, summary.trials, summary.passed, summary.gave_up, summary.seed
            ),
            Err(err) if err.is_counterexample() => {
                refuted += 1;
                warn!("❌ {}: {}", name, err);
            }
            Err(err) => {
                error!("Failed to check {}: {}", name, err);
                return Err(err).with_context(|| format!("Checking {name}"));
            }
        }
    }

    info!(
        "🏁 Checked {} properties, {} refuted",
        selected.len(),
        refuted
    );
    Ok(())
}

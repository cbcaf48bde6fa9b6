//! `mode targets_health`: share of healthy scrape targets.

use crate::core::plugin::{CheckOutcome, Evaluator, PerformanceDataCollection};
use crate::core::prometheus::PrometheusApi;
use crate::error::Result;

/// Label used for per-target perf data when the requested one is missing
pub const DEFAULT_LABEL: &str = "instance";

#[derive(Debug, Clone)]
pub struct TargetsHealthCheck {
    pub label: String,
    /// Applied to `health_rate`
    pub warning: String,
    pub critical: String,
}

impl Default for TargetsHealthCheck {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            warning: String::new(),
            critical: String::new(),
        }
    }
}

pub fn run(api: &dyn PrometheusApi, check: &TargetsHealthCheck) -> Result<CheckOutcome> {
    let evaluator = Evaluator::from_specs(&check.warning, &check.critical)?;
    let targets = api.targets()?.active_targets;

    let mut perfdata = PerformanceDataCollection::new();
    let mut healthy = 0usize;
    let mut unhealthy = 0usize;

    for target in &targets {
        log::debug!(
            "Job: {}, Instance: {}, Health: {}, Last Error: {}",
            target.labels.get("job").unwrap_or_default(),
            target.labels.get("instance").unwrap_or_default(),
            target.health,
            target.last_error
        );

        let health = if target.is_up() {
            healthy += 1;
            0.0
        } else {
            unhealthy += 1;
            1.0
        };

        let label = target
            .labels
            .get(&check.label)
            .or_else(|| target.labels.get(DEFAULT_LABEL))
            .unwrap_or_default();
        perfdata.add(label, health);
    }

    let total = targets.len() as f64;
    let health_rate = if targets.is_empty() {
        0.0
    } else {
        healthy as f64 / total
    };

    perfdata.add("health_rate", health_rate);
    perfdata.set_warn("health_rate", &evaluator.warning);
    perfdata.set_crit("health_rate", &evaluator.critical);
    perfdata.set_min("health_rate", 0.0);
    perfdata.set_max("health_rate", 1.0);
    perfdata.add("targets", total);
    perfdata.set_min("targets", 0.0);

    Ok(CheckOutcome::new(
        evaluator.evaluate(health_rate),
        format!(
            "There are {} healthy and {} unhealthy targets",
            healthy, unhealthy
        ),
        perfdata,
    ))
}

//! `mode ping`: confirm the server answers and report its build info.

use crate::core::freshness::Freshness;
use crate::core::plugin::{CheckOutcome, PerformanceDataCollection, State};
use crate::core::prometheus::{PrometheusApi, QueryResult};
use crate::error::{CheckError, Result};
use chrono::Utc;
use std::time::Instant;

/// Requires the server to scrape itself under the `prometheus` job
pub const BUILD_INFO_QUERY: &str = r#"prometheus_build_info{job="prometheus"}"#;

pub fn run(api: &dyn PrometheusApi, freshness: Freshness) -> Result<CheckOutcome> {
    let started = Instant::now();
    let result = api.query(BUILD_INFO_QUERY, Utc::now())?;
    let elapsed = started.elapsed();

    let sample = match result {
        QueryResult::Vector(mut samples) if samples.len() == 1 => samples.remove(0),
        _ => {
            return Err(CheckError::unexpected(format!(
                "the query '{}' did not return a vector with a single entry",
                BUILD_INFO_QUERY
            )))
        }
    };

    freshness.check_now(sample.timestamp)?;

    let mut perfdata = PerformanceDataCollection::new();
    perfdata.add("duration", elapsed.as_secs_f64());
    perfdata.set_unit("duration", "s");
    perfdata.set_min("duration", 0.0);

    let message = format!(
        "Version: {}, Instance {}",
        sample.labels.get("version").unwrap_or_default(),
        sample.labels.get("instance").unwrap_or_default()
    );

    Ok(CheckOutcome::new(State::Ok, message, perfdata))
}

//! Access to a Prometheus-compatible metrics server.

mod client;
pub mod model;

pub use client::HttpClient;
pub use model::{LabelSet, Point, QueryResult, Sample, Series, Target, TargetsData};

use crate::error::Result;
use chrono::{DateTime, Utc};

/// Source of query results and target health for the check modes.
///
/// `HttpClient` talks to a real server; tests substitute canned data.
pub trait PrometheusApi {
    /// Evaluate `query` at instant `at`
    fn query(&self, query: &str, at: DateTime<Utc>) -> Result<QueryResult>;

    /// Fetch the currently active scrape targets
    fn targets(&self) -> Result<TargetsData>;
}

//! Typed view of the Prometheus v1 HTTP API responses.
//!
//! Sample values travel as strings (`"1"`, `"NaN"`, `"+Inf"`) next to float
//! second timestamps; they are converted here so the rest of the crate only
//! sees `f64` and `DateTime<Utc>`.

use crate::error::{CheckError, Result};
use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Label name → value, kept sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeMap<String, String>);

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LabelSet(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Renders as `{__name__="up", instance="host:9100"}`
impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .0
            .iter()
            .map(|(name, value)| format!("{}={:?}", name, value))
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// One element of an instant vector
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub labels: LabelSet,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// One time series of a range vector
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub labels: LabelSet,
    pub points: Vec<Point>,
}

/// The three result shapes a check knows how to evaluate
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Scalar(Point),
    Vector(Vec<Sample>),
    Matrix(Vec<Series>),
}

impl QueryResult {
    pub fn result_type(&self) -> &'static str {
        match self {
            QueryResult::Scalar(_) => "scalar",
            QueryResult::Vector(_) => "vector",
            QueryResult::Matrix(_) => "matrix",
        }
    }
}

/// A scrape target reported by `/api/v1/targets`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(default)]
    pub labels: LabelSet,
    #[serde(default)]
    pub scrape_url: String,
    #[serde(default)]
    pub last_error: String,
    #[serde(default)]
    pub last_scrape: Option<DateTime<Utc>>,
    #[serde(default)]
    pub health: String,
}

impl Target {
    pub fn is_up(&self) -> bool {
        self.health == "up"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsData {
    #[serde(default)]
    pub active_targets: Vec<Target>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse<T> {
    status: String,
    data: Option<T>,
    error_type: Option<String>,
    error: Option<String>,
    #[serde(default)]
    warnings: Vec<String>,
}

impl<T> ApiResponse<T> {
    fn into_data(self) -> Result<T> {
        for warning in &self.warnings {
            log::warn!("API warning: {}", warning);
        }
        if self.status != "success" {
            return Err(CheckError::api(format!(
                "{}: {}",
                self.error_type.as_deref().unwrap_or("unknown"),
                self.error.as_deref().unwrap_or("no error message")
            )));
        }
        self.data
            .ok_or_else(|| CheckError::api("response has no data"))
    }
}

#[derive(Debug, Deserialize)]
struct RawPoint(f64, String);

impl RawPoint {
    fn into_point(self) -> Result<Point> {
        Ok(Point {
            value: parse_value(&self.1)?,
            timestamp: parse_timestamp(self.0)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawSample {
    #[serde(default)]
    metric: LabelSet,
    value: RawPoint,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    #[serde(default)]
    metric: LabelSet,
    #[serde(default)]
    values: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "resultType", content = "result", rename_all = "lowercase")]
enum RawQueryData {
    Scalar(RawPoint),
    String(RawPoint),
    Vector(Vec<RawSample>),
    Matrix(Vec<RawSeries>),
}

fn parse_value(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| CheckError::unexpected(format!("sample value '{}' is not a number", raw)))
}

fn parse_timestamp(secs: f64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
        .ok_or_else(|| CheckError::unexpected(format!("sample timestamp {} is out of range", secs)))
}

/// Decode the body of `/api/v1/query` into a typed result.
pub fn decode_query_response(body: &str, query: &str) -> Result<QueryResult> {
    let response: ApiResponse<RawQueryData> = serde_json::from_str(body)?;

    match response.into_data()? {
        RawQueryData::Scalar(point) => Ok(QueryResult::Scalar(point.into_point()?)),
        RawQueryData::String(_) => Err(CheckError::unsupported_shape("string", query)),
        RawQueryData::Vector(samples) => samples
            .into_iter()
            .map(|raw| -> Result<Sample> {
                let point = raw.value.into_point()?;
                Ok(Sample {
                    labels: raw.metric,
                    value: point.value,
                    timestamp: point.timestamp,
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(QueryResult::Vector),
        RawQueryData::Matrix(series) => series
            .into_iter()
            .map(|raw| -> Result<Series> {
                Ok(Series {
                    labels: raw.metric,
                    points: raw
                        .values
                        .into_iter()
                        .map(RawPoint::into_point)
                        .collect::<Result<Vec<_>>>()?,
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(QueryResult::Matrix),
    }
}

/// Decode the body of `/api/v1/targets`.
pub fn decode_targets_response(body: &str) -> Result<TargetsData> {
    let response: ApiResponse<TargetsData> = serde_json::from_str(body)?;
    if response.status != "success" {
        return Err(CheckError::api(format!(
            "the API target return status was {}",
            response.status
        )));
    }
    response.into_data()
}

/// Error carried by a non-success response body, when it is an API envelope.
pub fn error_from_body(body: &str) -> Option<CheckError> {
    let response: ApiResponse<IgnoredAny> = serde_json::from_str(body).ok()?;
    response.into_data().err()
}

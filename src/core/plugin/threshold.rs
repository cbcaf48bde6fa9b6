//! Nagios-plugin range thresholds.
//!
//! A range is written `[@]start:end`. `~` as start means negative infinity, an
//! omitted start means 0, an omitted end means positive infinity and a spec
//! without a colon is read as `0:end`. A value alerts when it lies outside the
//! range, or inside it when the spec starts with `@`.

use crate::error::{CheckError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    lower: f64,
    upper: f64,
    inverted: bool,
}

/// A parsed alert range. The empty threshold never alerts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Threshold {
    spec: String,
    range: Option<Range>,
}

impl Threshold {
    /// Parse a range spec such as `10`, `5:`, `~:5`, `10:20` or `@10:20`.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.is_empty() {
            return Ok(Self::default());
        }

        let (inverted, body) = match spec.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, spec),
        };

        if body.is_empty() {
            return Err(CheckError::threshold(spec, "missing range after '@'"));
        }

        let (start, end) = match body.split_once(':') {
            Some((_, end)) if end.contains(':') => {
                return Err(CheckError::threshold(spec, "more than one ':' in range"));
            }
            Some((start, end)) => (start, end),
            None => ("", body),
        };

        let lower = match start {
            "" => 0.0,
            "~" => f64::NEG_INFINITY,
            bound => parse_bound(spec, bound)?,
        };
        let upper = match end {
            "" => f64::INFINITY,
            bound => parse_bound(spec, bound)?,
        };

        if lower > upper {
            return Err(CheckError::threshold(
                spec,
                format!("start {} is greater than end {}", lower, upper),
            ));
        }

        Ok(Self {
            spec: spec.to_string(),
            range: Some(Range {
                lower,
                upper,
                inverted,
            }),
        })
    }

    /// Whether `value` is in the alert range.
    ///
    /// NaN cannot be placed on either side of a bound, so it alerts against
    /// any non-empty threshold.
    pub fn matches(&self, value: f64) -> bool {
        let Some(range) = self.range else {
            return false;
        };

        if value.is_nan() {
            return true;
        }

        let inside = range.lower <= value && value <= range.upper;
        if range.inverted {
            inside
        } else {
            !inside
        }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    /// The string this threshold was parsed from
    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn lower(&self) -> Option<f64> {
        self.range.map(|r| r.lower)
    }

    pub fn upper(&self) -> Option<f64> {
        self.range.map(|r| r.upper)
    }

    pub fn is_inverted(&self) -> bool {
        self.range.is_some_and(|r| r.inverted)
    }
}

fn parse_bound(spec: &str, bound: &str) -> Result<f64> {
    match bound.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CheckError::threshold(
            spec,
            format!("'{}' is not a number", bound),
        )),
    }
}

impl FromStr for Threshold {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        Threshold::parse(s)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

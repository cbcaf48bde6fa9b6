use super::perfdata::PerformanceDataCollection;
use super::state::State;
use crate::error::CheckError;
use std::fmt;

/// Render the status line read by the monitoring supervisor.
///
/// The `|` separator is only emitted when there is performance data.
pub fn format_output(state: State, message: &str, perfdata: &str) -> String {
    if perfdata.is_empty() {
        format!("{} - {}\n", state.name(), message)
    } else {
        format!("{} - {}|{}\n", state.name(), message, perfdata)
    }
}

/// Sample value as shown in status messages, with `NaN`, `+Inf` and `-Inf`
/// spelled the way Prometheus spells them.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        value.to_string()
    }
}

/// Final verdict of a check invocation
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub state: State,
    pub message: String,
    pub perfdata: PerformanceDataCollection,
}

impl CheckOutcome {
    pub fn new(state: State, message: impl Into<String>, perfdata: PerformanceDataCollection) -> Self {
        Self {
            state,
            message: message.into(),
            perfdata,
        }
    }

    /// UNKNOWN outcome carrying only a message
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(State::Unknown, message, PerformanceDataCollection::new())
    }

    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }
}

impl From<CheckError> for CheckOutcome {
    fn from(err: CheckError) -> Self {
        CheckOutcome::unknown(err.to_string())
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_output(
            self.state,
            &self.message,
            &self.perfdata.render(),
        ))
    }
}

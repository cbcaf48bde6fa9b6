//! Threshold evaluation and plugin result formatting.
//!
//! Everything in here is pure: thresholds are parsed once, samples are
//! evaluated and aggregated, and the outcome is rendered in the
//! nagios-plugin text format.

pub mod evaluator;
pub mod output;
pub mod perfdata;
pub mod state;
pub mod states;
pub mod threshold;

pub use evaluator::Evaluator;
pub use output::{format_output, format_value, CheckOutcome};
pub use perfdata::{PerformanceDataCollection, PerformanceDatum};
pub use state::State;
pub use states::{worst, States};
pub use threshold::Threshold;

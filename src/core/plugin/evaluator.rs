use super::state::State;
use super::threshold::Threshold;

/// Maps a sample to a state using a warning and a critical threshold.
///
/// Critical is checked first. An empty threshold never fires.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    pub warning: Threshold,
    pub critical: Threshold,
}

impl Evaluator {
    pub fn new(warning: Threshold, critical: Threshold) -> Self {
        Self { warning, critical }
    }

    /// Parse both specs, failing on the first invalid one.
    pub fn from_specs(warning: &str, critical: &str) -> crate::Result<Self> {
        Ok(Self {
            warning: Threshold::parse(warning)?,
            critical: Threshold::parse(critical)?,
        })
    }

    pub fn evaluate(&self, value: f64) -> State {
        if self.critical.matches(value) {
            State::Critical
        } else if self.warning.matches(value) {
            State::Warning
        } else {
            State::Ok
        }
    }
}

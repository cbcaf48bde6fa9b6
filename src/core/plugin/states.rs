use super::state::State;
use crate::error::{CheckError, Result};

/// States collected during one check run, reduced once to the worst.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct States(Vec<State>);

impl States {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: State) {
        self.0.push(state);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most severe state collected so far.
    pub fn worst(&self) -> Result<State> {
        worst(self.0.iter().copied())
    }
}

impl FromIterator<State> for States {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        States(iter.into_iter().collect())
    }
}

impl Extend<State> for States {
    fn extend<I: IntoIterator<Item = State>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Reduce `states` to the one with the highest severity rank.
pub fn worst<I>(states: I) -> Result<State>
where
    I: IntoIterator<Item = State>,
{
    states
        .into_iter()
        .max_by_key(|state| state.severity())
        .ok_or(CheckError::EmptyAggregation)
}

use std::fmt;
use std::str::FromStr;

/// Outcome of a check, as understood by the monitoring supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl State {
    pub const ALL: [State; 4] = [State::Ok, State::Warning, State::Critical, State::Unknown];

    /// Canonical name printed at the start of the status line
    pub fn name(self) -> &'static str {
        match self {
            State::Ok => "OK",
            State::Warning => "WARNING",
            State::Critical => "CRITICAL",
            State::Unknown => "UNKNOWN",
        }
    }

    /// Process exit status for this state
    pub fn exit_code(self) -> i32 {
        match self {
            State::Ok => 0,
            State::Warning => 1,
            State::Critical => 2,
            State::Unknown => 3,
        }
    }

    /// Rank used when reducing many states to the worst one.
    ///
    /// UNKNOWN outranks CRITICAL so an indeterminate sample is never masked.
    pub fn severity(self) -> u8 {
        match self {
            State::Ok => 0,
            State::Warning => 1,
            State::Critical => 2,
            State::Unknown => 3,
        }
    }

    /// Lenient lookup: anything that is not a known name is UNKNOWN.
    pub fn from_name(name: &str) -> State {
        name.parse().unwrap_or(State::Unknown)
    }
}

impl FromStr for State {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OK" => Ok(State::Ok),
            "WARNING" => Ok(State::Warning),
            "CRITICAL" => Ok(State::Critical),
            "UNKNOWN" => Ok(State::Unknown),
            other => Err(format!("unknown state '{}'", other)),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

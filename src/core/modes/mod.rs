//! Check modes: each turns API data into a single `CheckOutcome`.

pub mod ping;
pub mod query;
pub mod targets_health;

pub use query::QueryCheck;
pub use targets_health::TargetsHealthCheck;

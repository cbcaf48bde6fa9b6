// Core check logic

pub mod config;
pub mod freshness;
pub mod label_rewrite;
pub mod modes;
pub mod plugin;
pub mod prometheus;
pub mod query_encoding;

// Re-export commonly used items
pub use config::{CheckConfig, Cookie};
pub use freshness::Freshness;
pub use label_rewrite::LabelRewrite;
pub use query_encoding::QueryEncoding;

use super::string_arg;
use crate::core::modes::targets_health::{self, TargetsHealthCheck, DEFAULT_LABEL};
use crate::core::plugin::CheckOutcome;
use crate::core::prometheus::HttpClient;
use anyhow::{Context, Result};
use clap::ArgMatches;

pub fn execute(matches: &ArgMatches) -> Result<CheckOutcome> {
    let config = super::build_config(matches)?;

    let label = match string_arg(matches, "label") {
        label if label.is_empty() => DEFAULT_LABEL.to_string(),
        label => label,
    };

    let check = TargetsHealthCheck {
        label,
        warning: string_arg(matches, "warning"),
        critical: string_arg(matches, "critical"),
    };

    let client = HttpClient::new(&config).context("Error creating API client")?;
    targets_health::run(&client, &check)
        .with_context(|| format!("Error checking targets of {}", config.address))
}

// Command handlers module
pub mod completions;
pub mod ping;
pub mod query;
pub mod targets_health;

use crate::core::config::{CheckConfig, Cookie};
use crate::core::plugin::CheckOutcome;
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

/// Run the selected check mode; every failure becomes an UNKNOWN outcome.
pub fn execute(matches: &ArgMatches) -> CheckOutcome {
    match dispatch(matches) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::debug!("check failed: {:?}", e);
            CheckOutcome::unknown(format!("{:#}", e))
        }
    }
}

fn dispatch(matches: &ArgMatches) -> Result<CheckOutcome> {
    match matches.subcommand() {
        Some(("mode", mode_matches)) => match mode_matches.subcommand() {
            Some(("ping", sub_matches)) => ping::execute(sub_matches),
            Some(("query", sub_matches)) => query::execute(sub_matches),
            Some(("targets_health", sub_matches)) => targets_health::execute(sub_matches),
            _ => Err(anyhow!("no check mode given, use 'check_prometheus mode --help'")),
        },
        _ => Err(anyhow!("no command given, use 'check_prometheus --help'")),
    }
}

/// Build the shared settings from global and connection arguments
pub(crate) fn build_config(matches: &ArgMatches) -> Result<CheckConfig> {
    let address = matches
        .get_one::<String>("address")
        .context("Address argument is required")?;

    let config = CheckConfig::new(address)
        .with_context(|| format!("Invalid address '{}'", address))?
        .with_timeout_secs(matches.get_one::<u64>("timeout").copied().unwrap_or(0))
        .with_data_age_secs(matches.get_one::<u64>("data-age").copied().unwrap_or(0))
        .with_insecure(matches.get_flag("insecure"))
        .with_cookies(
            matches
                .get_many::<Cookie>("cookie")
                .map(|cookies| cookies.cloned().collect())
                .unwrap_or_default(),
        );

    Ok(config)
}

/// Value of an optional string argument, empty when absent
pub(crate) fn string_arg(matches: &ArgMatches, name: &str) -> String {
    matches.get_one::<String>(name).cloned().unwrap_or_default()
}

use crate::core::modes::ping;
use crate::core::plugin::CheckOutcome;
use crate::core::prometheus::HttpClient;
use anyhow::{Context, Result};
use clap::ArgMatches;

pub fn execute(matches: &ArgMatches) -> Result<CheckOutcome> {
    let config = super::build_config(matches)?;
    let client = HttpClient::new(&config).context("Error creating API client")?;

    ping::run(&client, config.freshness()).context("Error when running ping")
}

use super::string_arg;
use crate::core::modes::query::{self, QueryCheck};
use crate::core::plugin::{CheckOutcome, State};
use crate::core::prometheus::HttpClient;
use crate::core::query_encoding::QueryEncoding;
use anyhow::{Context, Result};
use clap::ArgMatches;

pub fn execute(matches: &ArgMatches) -> Result<CheckOutcome> {
    let config = super::build_config(matches)?;

    let raw_query = matches
        .get_one::<String>("query")
        .context("Query argument is required")?;
    let encoding = matches
        .get_one::<QueryEncoding>("query-encoding")
        .copied()
        .unwrap_or_default();
    let decoded = encoding.decode(raw_query)?;
    log::debug!("Decoded {:?} query: {}", encoding, decoded);

    let check = QueryCheck {
        query: decoded,
        warning: string_arg(matches, "warning"),
        critical: string_arg(matches, "critical"),
        alias: string_arg(matches, "alias"),
        search: string_arg(matches, "search"),
        replace: string_arg(matches, "replace"),
        empty_message: string_arg(matches, "eqm"),
        empty_state: State::from_name(&string_arg(matches, "eqs")),
    };

    let client = HttpClient::new(&config).context("Error creating API client")?;
    Ok(query::run(&client, &check, config.freshness())?)
}

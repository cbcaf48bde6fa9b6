use crate::core::config::{Cookie, DEFAULT_ADDRESS};
use crate::core::modes::ping::BUILD_INFO_QUERY;
use crate::core::modes::targets_health::DEFAULT_LABEL;
use crate::core::query_encoding::QueryEncoding;
use clap::{value_parser, Arg, ArgAction, Command};
use clap_complete::Shell;

const QUERY_EXAMPLES: &str = "\
The warning and critical values are applied to every value of the result.

Examples:
  Vector:
    check_prometheus mode query -q 'up'
    --> OK - Query: 'up'|'{__name__=\"up\", instance=\"0.0.0.0:9091\", job=\"prometheus\"}'=1;;;;

  Scalar:
    check_prometheus mode query -q 'scalar(up{job=\"prometheus\"})'
    --> OK - Query: 'scalar(up{job=\"prometheus\"})' returned: '1'|'scalar'=1;;;;

  Matrix:
    check_prometheus mode query -q 'http_requests_total{job=\"prometheus\"}[5m]'
    --> OK - Query: 'http_requests_total{job=\"prometheus\"}[5m]'

  Search and Replace:
    check_prometheus m query -q 'up' --search '^.*job=\"([^\"]*)\".*$' --replace '$1'
    --> OK - Query: 'up'|'prometheus'=1;;;; 'node'=0;;;;

  Empty results:
    check_prometheus m q -q 'alerts_firing' --eqm 'All OK' --eqs OK
    --> OK - All OK";

/// Build the command-line definition
pub fn build_cli() -> Command {
    Command::new("check_prometheus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks different prometheus stats as well the data itself")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Seconds till check returns unknown, 0 to disable")
                .value_parser(value_parser!(u64))
                .default_value("10")
                .global(true),
        )
        .arg(
            Arg::new("data-age")
                .short('f')
                .long("data-age")
                .value_name("SECONDS")
                .help("If the checked data is older than this in seconds, unknown will be returned. Set to 0 to disable.")
                .value_parser(value_parser!(u64))
                .default_value("300")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Log requests and decoded results to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("mode")
                .visible_alias("m")
                .about("Check mode")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("ping")
                        .visible_alias("p")
                        .about("Returns the build information")
                        .long_about(format!(
                            "Returns the build information\n\nThis check requires that the prometheus server itself is listed as target. Following query will be used: '{}'",
                            BUILD_INFO_QUERY
                        ))
                        .args(connection_args()),
                )
                .subcommand(
                    Command::new("query")
                        .visible_alias("q")
                        .about("Checks collected data")
                        .after_long_help(QUERY_EXAMPLES)
                        .args(connection_args())
                        .arg(
                            Arg::new("query")
                                .short('q')
                                .value_name("QUERY")
                                .help("Query to be executed")
                                .required(true),
                        )
                        .arg(
                            Arg::new("query-encoding")
                                .long("query-encoding")
                                .value_name("ENCODING")
                                .help("Query encoding if query is given in encoded form. Supports 'raw', 'base64' and 'url'.")
                                .value_parser(|s: &str| s.parse::<QueryEncoding>())
                                .default_value("raw"),
                        )
                        .arg(
                            Arg::new("alias")
                                .short('a')
                                .value_name("ALIAS")
                                .help("Alias, will replace the query within the output, if set"),
                        )
                        .args(threshold_args())
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .value_name("REGEX")
                                .help("If set, the given regex is used to search and replace the performance data labels with the 'replace' content"),
                        )
                        .arg(
                            Arg::new("replace")
                                .long("replace")
                                .value_name("REPLACEMENT")
                                .help("See search flag. Ignored when 'search' is empty."),
                        )
                        .arg(
                            Arg::new("eqm")
                                .long("eqm")
                                .value_name("MESSAGE")
                                .help("Message if the query returns no data"),
                        )
                        .arg(
                            Arg::new("eqs")
                                .long("eqs")
                                .value_name("STATE")
                                .help("Status if the query returns no data (OK, WARNING, CRITICAL, UNKNOWN)"),
                        ),
                )
                .subcommand(
                    Command::new("targets_health")
                        .about("Returns the health of the targets")
                        .long_about("Returns the health of the targets\n\nThe warning and critical thresholds are applied on the health_rate. The health_rate is calculated: sum(healthy) / sum(targets).")
                        .args(connection_args())
                        .args(threshold_args())
                        .arg(
                            Arg::new("label")
                                .short('l')
                                .value_name("LABEL")
                                .help("Prometheus label used for the performance data label")
                                .default_value(DEFAULT_LABEL),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .value_parser(value_parser!(Shell))
                        .required(true)
                        .index(1),
                ),
        )
}

fn connection_args() -> [Arg; 3] {
    [
        Arg::new("address")
            .long("address")
            .value_name("URL")
            .help("Prometheus address: Protocol + IP + Port")
            .default_value(DEFAULT_ADDRESS),
        Arg::new("insecure")
            .short('k')
            .long("insecure")
            .help("Skip TLS certificate verification (insecure)")
            .action(ArgAction::SetTrue),
        Arg::new("cookie")
            .long("cookie")
            .value_name("NAME=VALUE")
            .help("Cookie to send during the api request")
            .value_parser(|s: &str| s.parse::<Cookie>())
            .action(ArgAction::Append),
    ]
}

fn threshold_args() -> [Arg; 2] {
    [
        Arg::new("warning")
            .short('w')
            .value_name("RANGE")
            .help("Warning value. Use nagios-plugin syntax here.")
            .allow_hyphen_values(true),
        Arg::new("critical")
            .short('c')
            .value_name("RANGE")
            .help("Critical value. Use nagios-plugin syntax here.")
            .allow_hyphen_values(true),
    ]
}

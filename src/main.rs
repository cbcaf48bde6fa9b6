use anyhow::Result;
use clap::error::ErrorKind;

use check_prometheus::cli::build_cli;
use check_prometheus::{cli_error_outcome, commands, init_logging, CheckOutcome, State};

fn main() -> Result<()> {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            e.exit()
        }
        Err(e) if e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = e.print();
            std::process::exit(State::Unknown.exit_code())
        }
        Err(e) => exit_with(cli_error_outcome(&e)),
    };

    init_logging(matches.get_flag("verbose"));

    if let Some(("completions", sub_matches)) = matches.subcommand() {
        return commands::completions::execute(sub_matches, &mut build_cli());
    }

    exit_with(commands::execute(&matches))
}

fn exit_with(outcome: CheckOutcome) -> ! {
    print!("{}", outcome);
    std::process::exit(outcome.exit_code())
}

use anyhow::Result;
use clap::{Arg, Command};

use procview::commands;

fn main() -> Result<()> {
    let matches = Command::new("procview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Filter and sort process snapshots the way a live process view does")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(commands::view::command())
        .subcommand(Command::new("fields").about("List the sortable fields"))
        .get_matches();

    procview::init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("view", sub_matches)) => commands::view(sub_matches)?,
        Some(("fields", _)) => commands::fields()?,
        _ => unreachable!("subcommand_required prevents this"),
    }

    Ok(())
}

//! `procview view` command handler.
//!
//! Loads a process snapshot, applies a view preset plus command-line
//! overrides and prints the resulting ordered list.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::core::config::ViewConfig;
use crate::core::process_view::{
    NumericClause, ProcessRecord, ProcessStatus, ProcessView, SortDirection, SortField,
};
use crate::ui::print_process_table;

/// Definition of the `view` subcommand
pub fn command() -> Command {
    Command::new("view")
        .about("Filter and sort a process snapshot")
        .arg(
            Arg::new("snapshot")
                .help("JSON array of process records ('-' for stdin)")
                .value_name("FILE")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("View preset (JSON) with filters, search, sort and pins"),
        )
        .arg(
            Arg::new("search")
                .short('s')
                .long("search")
                .value_name("TERMS")
                .help("Comma-separated search terms (substring or regex)"),
        )
        .arg(
            Arg::new("cpu")
                .long("cpu")
                .value_name("EXPR")
                .allow_hyphen_values(true)
                .help("CPU filter in percent, e.g. '>50'"),
        )
        .arg(
            Arg::new("ram")
                .long("ram")
                .value_name("EXPR")
                .allow_hyphen_values(true)
                .help("Memory filter in MiB, e.g. '>=200'"),
        )
        .arg(
            Arg::new("runtime")
                .long("runtime")
                .value_name("EXPR")
                .allow_hyphen_values(true)
                .help("Run time filter in minutes, e.g. '<5'"),
        )
        .arg(
            Arg::new("status")
                .long("status")
                .value_name("STATUS")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Only show these statuses (Running, Sleeping, Stopped, Zombie)"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .value_name("FIELD")
                .help("Sort field (see 'procview fields')"),
        )
        .arg(
            Arg::new("asc")
                .long("asc")
                .action(ArgAction::SetTrue)
                .conflicts_with("desc")
                .help("Sort ascending"),
        )
        .arg(
            Arg::new("desc")
                .long("desc")
                .action(ArgAction::SetTrue)
                .help("Sort descending"),
        )
        .arg(
            Arg::new("pin")
                .short('p')
                .long("pin")
                .value_name("COMMAND")
                .action(ArgAction::Append)
                .help("Pin a command to the top of the list (repeatable)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the ordered view as JSON"),
        )
}

/// Execute the view command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ViewConfig::from_file(path)?,
        None => ViewConfig::default(),
    };
    apply_overrides(&mut config, matches)?;

    let snapshot_path = matches
        .get_one::<String>("snapshot")
        .map(String::as_str)
        .unwrap_or("-");
    let snapshot = load_snapshot(snapshot_path)?;
    log::debug!("Loaded {} processes from {}", snapshot.len(), snapshot_path);

    let view = ProcessView::new(config);
    let ordered = view.refresh(&snapshot);

    if matches.get_flag("json") {
        println!(
            "{}",
            serde_json::to_string_pretty(&ordered).context("Failed to serialize view")?
        );
    } else {
        print_process_table(&ordered, view.pins());
    }

    Ok(())
}

/// Command-line flags take precedence over the preset
pub fn apply_overrides(config: &mut ViewConfig, matches: &ArgMatches) -> Result<()> {
    if let Some(search) = matches.get_one::<String>("search") {
        config.search = search.clone();
    }

    if let Some(expr) = matches.get_one::<String>("cpu") {
        config.filter = config.filter.with_cpu(parse_clause("cpu", expr)?);
    }
    if let Some(expr) = matches.get_one::<String>("ram") {
        config.filter = config.filter.with_ram(parse_clause("ram", expr)?);
    }
    if let Some(expr) = matches.get_one::<String>("runtime") {
        config.filter = config.filter.with_runtime(parse_clause("runtime", expr)?);
    }

    if let Some(statuses) = matches.get_many::<String>("status") {
        let values = statuses
            .map(|s| s.parse::<ProcessStatus>())
            .collect::<crate::Result<Vec<_>>>()
            .context("Invalid --status value")?;
        config.filter = config.filter.with_status_values(values);
    }

    if let Some(field) = matches.get_one::<String>("sort") {
        config.sort.field = field
            .parse::<SortField>()
            .context("Invalid --sort value")?;
    }
    if matches.get_flag("asc") {
        config.sort.direction = SortDirection::Asc;
    } else if matches.get_flag("desc") {
        config.sort.direction = SortDirection::Desc;
    }

    if let Some(pins) = matches.get_many::<String>("pin") {
        for command in pins {
            config.pinned.pin(command.as_str());
        }
    }

    Ok(())
}

fn parse_clause(flag: &str, expr: &str) -> Result<NumericClause> {
    NumericClause::parse_expression(expr).with_context(|| format!("Invalid --{} value", flag))
}

/// Read a JSON array of process records from a file, or stdin for `-`
pub fn load_snapshot(path: &str) -> Result<Vec<ProcessRecord>> {
    if path == "-" {
        let mut data = String::new();
        io::stdin()
            .read_to_string(&mut data)
            .context("Failed to read snapshot from stdin")?;
        return serde_json::from_str(&data).context("Failed to parse snapshot from stdin");
    }

    let file = File::open(Path::new(path))
        .with_context(|| format!("Failed to open snapshot: {}", path))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse snapshot: {}", path))
}

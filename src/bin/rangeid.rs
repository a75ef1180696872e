//! Command-line interface for rangeid
//!
//! Reads identifier lists in any supported dialect and writes them back out
//! in the chosen export format.
//!
//! Usage:
//!   rangeid [TEXT]... [--file `<path>`]... [--remove `<text>`]... [--format `<name>`]
//!   rangeid --count `<text>`                 - Print the number of identifiers
//!   rangeid --list-formats                   - List all available export formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use rangeid::config::{Loader, RangeIdConfig};
use rangeid::formats::{render, ExportRegistry};
use rangeid::logging::{self, LogLevel};
use rangeid::RangeSet;
use std::io::Read;

fn main() {
    let matches = build_cli().get_matches();
    let registry = ExportRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats(&registry);
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    logging::init_with_level(config.log.level);

    let set = collect_input(&matches).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("count") {
        println!("Total {} identifiers.", set.count());
        return;
    }

    let items = render(&set, config.output.packing);
    let output = registry
        .export(&items, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Export error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
}

fn build_cli() -> Command {
    Command::new("rangeid")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert CAE identifier lists into canonical ranges")
        .arg(
            Arg::new("text")
                .help("Identifier text, e.g. '100:102,109' or '1 THRU 9 BY 2'")
                .num_args(1..)
                .action(ArgAction::Append)
                .index(1),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Read identifier text from a file (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("remove")
                .long("remove")
                .short('r')
                .help("Identifier text to subtract from the result (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('o')
                .help("Export format (see --list-formats)"),
        )
        .arg(
            Arg::new("unpacked")
                .long("unpacked")
                .short('u')
                .help("Write one item per identifier")
                .action(ArgAction::SetTrue)
                .conflicts_with("packed"),
        )
        .arg(
            Arg::new("packed")
                .long("packed")
                .short('p')
                .help("Write one item per range")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('c')
                .help("Print the number of identifiers instead of the items")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available export formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log dropped tokens and candidates to stderr")
                .action(ArgAction::SetTrue),
        )
}

/// Defaults, then `--config`, then `RANGEID__*`, then flags
fn load_config(matches: &ArgMatches) -> Result<RangeIdConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();

    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("unpacked") {
        loader = loader.set_override("output.packing", "unpacked")?;
    } else if matches.get_flag("packed") {
        loader = loader.set_override("output.packing", "packed")?;
    }
    if matches.get_flag("verbose") {
        loader = loader.set_override("log.level", LogLevel::Debug.to_string())?;
    }

    loader.build()
}

/// Positional texts and files in order, stdin when neither is given, then removals
fn collect_input(matches: &ArgMatches) -> std::io::Result<RangeSet> {
    let mut set = RangeSet::new();
    let texts: Vec<&String> = matches
        .get_many::<String>("text")
        .map(|values| values.collect())
        .unwrap_or_default();
    let files: Vec<&String> = matches
        .get_many::<String>("file")
        .map(|values| values.collect())
        .unwrap_or_default();

    if texts.is_empty() && files.is_empty() {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        set.add_text(&source);
    } else {
        for text in texts {
            set.add_text(text);
        }
        for path in files {
            let source = std::fs::read_to_string(path).map_err(|e| {
                std::io::Error::new(e.kind(), format!("{}: {}", path, e))
            })?;
            set.add_text(&source);
        }
    }

    if let Some(removals) = matches.get_many::<String>("remove") {
        for text in removals {
            set.remove_text(text);
        }
    }

    tracing::debug!(
        ranges = set.count_ranges(),
        identifiers = set.count(),
        "input collected"
    );
    Ok(set)
}

/// Handle the --list-formats flag
fn handle_list_formats(registry: &ExportRegistry) {
    println!("Available export formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(exporter) = registry.get(&name) {
            println!("    {}", exporter.description());
        }
    }
}

//! Well-known flavor inspection binary

use clap::{Parser, Subcommand};
use mediapack::ElementFlavor;
use mediapack::exit_codes::*;
use mediapack::mediapackage::elements;
use serde::Serialize;
use std::{env, panic, process};

const VERSION: &str = mediapack::version::VERSION;

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Inspect the well-known media package flavors")]
struct Args {
    /// Log level (trace, debug, info, warn, error, or json[:level])
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every well-known flavor
    List {
        /// Emit the registry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a type/subtype string and resolve it against the registry
    Check {
        /// Flavor in type/subtype form
        flavor: String,
    },
}

/// One registry row as emitted by `list --json`
#[derive(Debug, Serialize)]
struct RegistryEntry<'a> {
    name: &'a str,
    flavor: &'a ElementFlavor,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    // Wrap main logic in catch_unwind for extra safety
    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in flavor inspection");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("mediapack-flavors {}", mediapack::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = Args::parse();

    // Initialize logging with level if provided
    match args.log_level {
        Some(ref level) => mediapack::logger::init_with_level(level),
        None => mediapack::logger::init(),
    }

    match args.command {
        Command::List { json } => list(json),
        Command::Check { flavor } => check(&flavor),
    }
}

fn sorted_entries() -> Vec<(&'static str, &'static ElementFlavor)> {
    let mut entries: Vec<(&'static str, &'static ElementFlavor)> = elements::WELL_KNOWN
        .iter()
        .map(|(name, flavor)| (*name, flavor))
        .collect();
    entries.sort_by(|a, b| a.1.cmp(b.1));
    entries
}

fn list(json: bool) -> i32 {
    log::debug!("Listing {} well-known flavors", elements::WELL_KNOWN.len());

    if json {
        let rows: Vec<RegistryEntry<'_>> = sorted_entries()
            .into_iter()
            .map(|(name, flavor)| RegistryEntry {
                name,
                flavor,
                description: flavor.description(),
            })
            .collect();

        match serde_json::to_string_pretty(&rows) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("JSON error: {e}");
                return EXIT_JSON_ERROR;
            }
        }
        return EXIT_SUCCESS;
    }

    for (name, flavor) in sorted_entries() {
        let wire = flavor.to_string();
        match flavor.description() {
            Some(description) => println!("{name:<34} {wire:<26} {description}"),
            None => println!("{name:<34} {wire}"),
        }
    }
    EXIT_SUCCESS
}

fn check(input: &str) -> i32 {
    let flavor = match ElementFlavor::parse(input) {
        Ok(flavor) => flavor,
        Err(e) => {
            eprintln!("{e}");
            return EXIT_MALFORMED_FLAVOR;
        }
    };

    match elements::lookup_name(flavor.flavor_type(), flavor.subtype()) {
        Some(name) => {
            println!("{flavor} is well known as {name}");
            EXIT_SUCCESS
        }
        None => {
            println!("{flavor} is not a well-known flavor");
            EXIT_UNKNOWN_FLAVOR
        }
    }
}

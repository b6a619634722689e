//! Command-line interface for blueprint
//! This binary turns design frames into layout IR, and layout IR into HTML previews
//! and page-builder import documents.
//!
//! Usage:
//!   blueprint import `<url>` [--token `<token>`]                    - Fetch and classify a frame
//!   blueprint classify `<file>` [--node-id `<id>`]                  - Classify a saved node tree
//!   blueprint html `<layout>`                                     - Render an HTML preview
//!   blueprint export `<layout>` [--dialect `<d>`] [--title `<t>`]   - Page-builder document
//!   blueprint diagnose `<layout>`                                 - Layout statistics
//!   blueprint formats                                           - List output formats
//!
//! Every command accepts `--config <file>`, `--output <file>` and `--verbose`.
//! A `<layout>` of `-` is read from stdin.

mod commands;

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let layout_arg = Arg::new("layout")
        .help("Layout IR JSON file, or '-' for stdin")
        .required(true)
        .index(1);

    Command::new("blueprint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns design frames into HTML previews and page-builder templates")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .global(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log classification and export decisions to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("import")
                .about("Fetch a frame from the design API and print its layout IR")
                .arg(
                    Arg::new("url")
                        .help("Design URL with a node-id query parameter")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("token")
                        .long("token")
                        .help("Design API access token")
                        .env("FIGMA_TOKEN")
                        .hide_env_values(true),
                ),
        )
        .subcommand(
            Command::new("classify")
                .about("Classify a saved node tree or nodes API response")
                .arg(
                    Arg::new("file")
                        .help("JSON file with a frame node or a nodes API response")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("node-id")
                        .long("node-id")
                        .help("Node to pick from a nodes API response (e.g. 1:2 or 1-2)"),
                ),
        )
        .subcommand(
            Command::new("html")
                .about("Render layout IR as a self-contained HTML preview")
                .arg(layout_arg.clone()),
        )
        .subcommand(
            Command::new("export")
                .about("Export layout IR as a page-builder import document")
                .arg(layout_arg.clone())
                .arg(
                    Arg::new("dialect")
                        .long("dialect")
                        .short('d')
                        .help("Structural dialect: classic, classic_simple or container"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .short('t')
                        .help("Document title"),
                ),
        )
        .subcommand(
            Command::new("diagnose")
                .about("Print node, style and image statistics for layout IR")
                .arg(layout_arg),
        )
        .subcommand(Command::new("formats").about("List the registered output formats"))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("blueprint_import=debug,blueprint_babel=debug,blueprint_cli=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let Some((name, sub_matches)) = matches.subcommand() else {
        eprintln!("No command given; see --help");
        std::process::exit(2);
    };

    let output = commands::run(name, sub_matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match sub_matches.get_one::<String>("output") {
        Some(path) => {
            if let Err(e) = std::fs::write(path, output) {
                eprintln!("Error: failed to write {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => println!("{}", output),
    }
}

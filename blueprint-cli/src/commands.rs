//! Subcommand handlers
//!
//! Each handler returns the text to print, or a message for stderr. Configuration is
//! layered as: embedded defaults, `./blueprint.toml`, `--config`, `BLUEPRINT__*`
//! variables, then command-line flags.

use blueprint_babel::{export, FormatRegistry};
use blueprint_config::{BlueprintConfig, Loader};
use blueprint_core::{analyze, LayoutNode};
use blueprint_import::{Classifier, DocumentRef, FigmaClient, FileSource, Importer};
use clap::ArgMatches;
use std::io::Read;
use tracing::{debug, info};

/// Picked up from the working directory when present.
const LOCAL_CONFIG: &str = "blueprint.toml";

/// Command-line flags that override configuration keys.
const FLAG_OVERRIDES: &[(&str, &str)] = &[
    ("token", "figma.token"),
    ("dialect", "export.dialect"),
    ("title", "export.title"),
];

/// Run the named subcommand
pub fn run(name: &str, matches: &ArgMatches) -> Result<String, String> {
    let config = load_config(matches)?;
    debug!(command = name, dialect = %config.export.dialect, "configuration loaded");

    match name {
        "import" => handle_import(matches, &config),
        "classify" => handle_classify(matches, &config),
        "html" => handle_html(matches),
        "export" => handle_export(matches, &config),
        "diagnose" => handle_diagnose(matches),
        "formats" => Ok(handle_formats()),
        _ => Err(format!("Unknown command: {}", name)),
    }
}

fn load_config(matches: &ArgMatches) -> Result<BlueprintConfig, String> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let mut loader = loader.with_env();

    for (flag, key) in FLAG_OVERRIDES {
        if let Some(value) = matches.try_get_one::<String>(flag).ok().flatten() {
            loader = loader
                .set_override(key, value.as_str())
                .map_err(|e| format!("Invalid --{}: {}", flag, e))?;
        }
    }

    loader
        .build()
        .map_err(|e| format!("Configuration error: {}", e))
}

/// Fetch a frame from the design API
fn handle_import(matches: &ArgMatches, config: &BlueprintConfig) -> Result<String, String> {
    let url = required(matches, "url")?;
    let client = FigmaClient::new(config.figma.client_options()).map_err(|e| e.to_string())?;
    let importer = Importer::new(client, Classifier::new(config.classifier.clone()));

    info!(url, "importing frame");
    let layout = importer
        .import_url(url)
        .map_err(|e| format!("Import failed: {}", e))?;
    to_json(&layout)
}

/// Classify a node tree saved on disk
fn handle_classify(matches: &ArgMatches, config: &BlueprintConfig) -> Result<String, String> {
    let path = required(matches, "file")?;
    let node_id = matches
        .get_one::<String>("node-id")
        .map(|id| id.replace('-', ":"))
        .unwrap_or_default();

    let importer = Importer::new(FileSource::new(path), Classifier::new(config.classifier.clone()));
    let layout = importer
        .import(&DocumentRef::new("local", node_id))
        .map_err(|e| format!("Classification failed: {}", e))?;
    to_json(&layout)
}

fn handle_html(matches: &ArgMatches) -> Result<String, String> {
    let layout = read_layout(matches)?.unwrap_or_else(|| LayoutNode::section(Vec::new()));
    FormatRegistry::default()
        .serialize(&layout, "html")
        .map_err(|e| format!("HTML rendering failed: {}", e))
}

fn handle_export(matches: &ArgMatches, config: &BlueprintConfig) -> Result<String, String> {
    let layout = read_layout(matches)?;
    let document = export(layout.as_ref(), &config.export.title, config.export.dialect);
    to_json(&document)
}

fn handle_diagnose(matches: &ArgMatches) -> Result<String, String> {
    let layout = read_layout(matches)?;
    to_json(&analyze(layout.as_ref()))
}

/// List registered formats and what they support
fn handle_formats() -> String {
    let registry = FormatRegistry::default();
    let mut out = String::from("Available formats:\n");

    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut modes = Vec::new();
        if format.supports_parsing() {
            modes.push("parse");
        }
        if format.supports_serialization() {
            modes.push("serialize");
        }
        out.push_str(&format!("\n  {} [{}]\n", name, modes.join(", ")));
        out.push_str(&format!("    {}\n", format.description()));
    }

    out
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing argument: {}", name))
}

/// Read layout IR from a file or stdin. Blank input and `null` mean "no layout".
fn read_layout(matches: &ArgMatches) -> Result<Option<LayoutNode>, String> {
    let path = required(matches, "layout")?;
    let source = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?
    };

    let trimmed = source.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    LayoutNode::from_json(trimmed)
        .map(Some)
        .map_err(|e| format!("Invalid layout JSON in {}: {}", path, e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {}", e))
}

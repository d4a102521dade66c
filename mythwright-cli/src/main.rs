// Command-line interface for mythwright
//
// A thin shell around mythwright-compat for working with legacy brews outside
// the editor: listing their variable definitions, rendering them, importing
// them into editor JSON and checking stored documents.
//
// Usage:
//  mythwright vars <path> [--json]                                   - List variable definitions
//  mythwright render <path> [--from <format>] [--to <format>] [-o <file>] - Render to HTML or text
//  mythwright import <path> [-o <file>]                              - Legacy brew → definitions + tree JSON
//  mythwright validate <path>                                        - Check a JSON document tree
//
// The source format of `render` is auto-detected from the file extension
// (.json → json, .md/.markdown → markdown, anything else → legacy) and can be
// overridden with --from. The target defaults to `render.default_target`.

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mythwright_compat::{
    ensure_document_tree, extract_variable_definitions, is_valid_document_tree, DocumentTree,
    ImportOptions,
};
use mythwright_config::{Loader, MythwrightConfig, RenderTarget};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Source formats accepted by `render --from`
const SOURCE_FORMATS: &[&str] = &["legacy", "markdown", "json"];

/// Target formats accepted by `render --to`
const TARGET_FORMATS: &[&str] = &["html", "text"];

fn path_arg(help: &'static str) -> Arg {
    Arg::new("path")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("mythwright")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and convert legacy Homebrewery brews")
        .long_about(
            "mythwright works with brews written before the rich editor existed.\n\n\
            Commands:\n  \
            - vars:     list the [label]: content definitions of a brew\n  \
            - render:   render a brew or editor JSON to HTML or plain text\n  \
            - import:   convert a brew into definitions plus an editor document tree\n  \
            - validate: check that a JSON file is a document tree\n\n\
            Logging:\n  \
            Use -v (repeatable) or set MYTHWRIGHT_LOG to a tracing filter directive.\n\n\
            Examples:\n  \
            mythwright vars brew.md                  # [marker]label = content, one per line\n  \
            mythwright render brew.md --to text      # Plain text of the brew\n  \
            mythwright import brew.md -o brew.json   # Editor JSON for the brew",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mythwright.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("vars")
                .about("List variable definitions found in a legacy brew (marker shown before the label)")
                .arg(path_arg("Path to the legacy brew"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the definitions as a JSON array")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document to HTML or plain text")
                .long_about(
                    "Render a document to HTML or plain text.\n\n\
                    Source formats:\n  \
                    - legacy:   text taken verbatim as a single paragraph\n  \
                    - markdown: legacy brew markup (definitions handled per import.strip_definitions)\n  \
                    - json:     editor document tree\n\n\
                    The source format is auto-detected from the file extension.",
                )
                .arg(path_arg("Path to the document"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_parser(clap::builder::PossibleValuesParser::new(SOURCE_FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to render.default_target)")
                        .value_parser(clap::builder::PossibleValuesParser::new(TARGET_FORMATS))
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Import a legacy brew as definitions plus an editor document tree")
                .arg(path_arg("Path to the legacy brew"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check that a JSON file holds a document tree")
                .arg(path_arg("Path to the JSON document")),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    logging::init_logging(matches.get_count("verbose"), &config.logging.level);

    match matches.subcommand() {
        Some(("vars", sub_matches)) => {
            let path = required_path(sub_matches);
            handle_vars_command(path, sub_matches.get_flag("json"), &config);
        }
        Some(("render", sub_matches)) => {
            let path = required_path(sub_matches);
            let from = sub_matches
                .get_one::<String>("from")
                .map(|s| s.as_str())
                .unwrap_or_else(|| detect_source_format(path));
            let to = match sub_matches.get_one::<String>("to").map(|s| s.as_str()) {
                Some("text") => RenderTarget::Text,
                Some(_) => RenderTarget::Html,
                None => config.render.default_target,
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(path, from, to, output, &config);
        }
        Some(("import", sub_matches)) => {
            let path = required_path(sub_matches);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_import_command(path, output, &config);
        }
        Some(("validate", sub_matches)) => {
            handle_validate_command(required_path(sub_matches), &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required_path(matches: &ArgMatches) -> &str {
    // clap enforces `required(true)` on every path argument
    matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or_default()
}

fn load_cli_config(explicit_path: Option<&str>) -> MythwrightConfig {
    let loader = Loader::new().with_optional_file("mythwright.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Source format from the file extension
fn detect_source_format(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => "json",
        Some("md") | Some("markdown") => "markdown",
        _ => "legacy",
    }
}

/// Read an input file, enforcing `extract.max_input_bytes`
fn read_input(path: &str, config: &MythwrightConfig) -> String {
    let limit = config.extract.max_input_bytes;
    match fs::metadata(path) {
        Ok(metadata) if metadata.len() > limit as u64 => {
            eprintln!(
                "Error: '{path}' is {} bytes, over the {limit} byte limit (extract.max_input_bytes)",
                metadata.len()
            );
            std::process::exit(1);
        }
        _ => {}
    }

    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn read_json(path: &str, config: &MythwrightConfig) -> Value {
    let source = read_input(path, config);
    serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON in '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(content: &str, output: Option<&str>) {
    match output {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{content}"),
    }
}

fn handle_vars_command(path: &str, as_json: bool, config: &MythwrightConfig) {
    let source = read_input(path, config);
    let definitions = extract_variable_definitions(&source);
    tracing::info!(path, count = definitions.len(), "extracted variable definitions");

    if as_json {
        let json = serde_json::to_string_pretty(&definitions).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
        println!("{json}");
        return;
    }

    for definition in &definitions {
        let marker = definition
            .marker
            .map(|marker| marker.as_char().to_string())
            .unwrap_or_default();
        println!("{marker}{} = {}", definition.label, definition.content);
    }
}

fn handle_render_command(
    path: &str,
    from: &str,
    to: RenderTarget,
    output: Option<&str>,
    config: &MythwrightConfig,
) {
    let converter = config.render.converter();
    tracing::debug!(path, source_format = from, target = ?to, "rendering document");

    let doc: DocumentTree = match from {
        "json" => {
            let value = read_json(path, config);
            if !is_valid_document_tree(&value) {
                eprintln!("Error: '{path}' is not a document tree");
                std::process::exit(1);
            }
            ensure_document_tree(value)
        }
        "markdown" => {
            let source = read_input(path, config);
            let options = ImportOptions::from(&config.import);
            converter.import_legacy(&source, &options).tree
        }
        _ => ensure_document_tree(read_input(path, config)),
    };

    let rendered = match to {
        RenderTarget::Html => converter.try_markup(&doc),
        RenderTarget::Text => converter.try_plain_text(&doc),
    };

    match rendered {
        Ok(content) => write_output(&content, output),
        Err(e) => {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        }
    }
}

fn handle_import_command(path: &str, output: Option<&str>, config: &MythwrightConfig) {
    let source = read_input(path, config);
    let converter = config.render.converter();
    let import = converter.import_legacy(&source, &ImportOptions::from(&config.import));

    let json = serde_json::to_string_pretty(&import).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    write_output(&json, output);
}

fn handle_validate_command(path: &str, config: &MythwrightConfig) {
    let source = read_input(path, config);
    let valid = serde_json::from_str::<Value>(&source)
        .map(|value| is_valid_document_tree(&value))
        .unwrap_or(false);

    if valid {
        println!("valid");
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}

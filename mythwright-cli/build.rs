use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// Build scripts can't reach src/ modules, so the shape is duplicated here
const SOURCE_FORMATS: &[&str] = &["legacy", "markdown", "json"];
const TARGET_FORMATS: &[&str] = &["html", "text"];

fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mythwright")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and convert legacy Homebrewery brews")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("vars")
                .arg(path_arg("path", "Path to the legacy brew"))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("render")
                .arg(path_arg("path", "Path to the document"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(SOURCE_FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(TARGET_FORMATS)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("import")
                .arg(path_arg("path", "Path to the legacy brew"))
                .arg(output_arg()),
        )
        .subcommand(Command::new("validate").arg(path_arg("path", "Path to the JSON document")));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mythwright", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mythwright", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mythwright", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

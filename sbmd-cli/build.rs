use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const DIALECTS: &[&str] = &["markdown", "md", "scrapbox", "sb", "cosense"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let dialect_arg = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .help(help)
            .value_parser(clap::builder::PossibleValuesParser::new(DIALECTS))
            .ignore_case(true)
            .value_hint(ValueHint::Other)
    };

    let mut cmd = Command::new("sbmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and Scrapbox markup")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available dialects and converters")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a sbmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Do not print the status line")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("md2sb")
                .visible_alias("to-scrapbox")
                .about("Convert Markdown on the clipboard to Scrapbox markup"),
        )
        .subcommand(
            Command::new("sb2md")
                .visible_alias("to-markdown")
                .about("Convert Scrapbox markup on the clipboard to Markdown"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a file or stdin")
                .arg(
                    Arg::new("input")
                        .help("Input file path ('-' or omitted for stdin)")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dialect_arg("from", "Source dialect"))
                .arg(dialect_arg("to", "Target dialect").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "sbmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "sbmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "sbmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

// Command-line interface for sbmd
//
// This binary converts text between Obsidian-flavored Markdown and Scrapbox/Cosense markup.
//
// The everyday use is the clipboard: copy text in one editor, run `sbmd md2sb` (or `sbmd sb2md`),
// and paste the converted text into the other. The conversion itself lives in the sbmd-babel
// crate; this binary only reads the input, hands it over, and writes the result back.
//
// Usage:
//  sbmd md2sb                                         - Markdown → Scrapbox, clipboard in place
//  sbmd sb2md                                         - Scrapbox → Markdown, clipboard in place
//  sbmd convert [<input>] --to <dialect> [--from <dialect>] [--output <file>]
//  sbmd <input> --to <dialect>                        - Same as convert
//  sbmd --list-formats                                - List dialects and converters
//
// Exit codes: 0 on success, 1 when there is nothing to convert or the invocation is invalid,
// 2 when the clipboard or a file cannot be accessed.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command, ValueHint};
use sbmd_babel::{BabelError, ConverterRegistry, Dialect, Direction};
use sbmd_cli::clipboard::SystemClipboard;
use sbmd_cli::session::{
    finish_output, hold_clipboard, run_clipboard_session, SessionOutcome, Stream,
    EXIT_EMPTY_INPUT, EXIT_IO_ERROR, EXIT_USAGE,
};
use std::io::Write;
use sbmd_cli::status;
use sbmd_config::{Loader, SbmdConfig, LOCAL_CONFIG_FILE};
use tracing_subscriber::EnvFilter;

/// Dialect names and aliases accepted by `--from` and `--to`.
const DIALECTS: &[&str] = &["markdown", "md", "scrapbox", "sb", "cosense"];

const SUBCOMMANDS: &[&str] = &[
    "md2sb",
    "to-scrapbox",
    "sb2md",
    "to-markdown",
    "convert",
    "help",
];

fn build_cli() -> Command {
    Command::new("sbmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and Scrapbox markup")
        .long_about(
            "sbmd converts text between Obsidian-flavored Markdown and Scrapbox/Cosense markup.\n\n\
            Commands:\n  \
            - md2sb:   Markdown → Scrapbox, rewriting the clipboard in place\n  \
            - sb2md:   Scrapbox → Markdown, rewriting the clipboard in place\n  \
            - convert: Convert a file or stdin\n\n\
            Examples:\n  \
            sbmd md2sb                          # Copy Markdown, run, paste into Scrapbox\n  \
            sbmd sb2md                          # Copy a Scrapbox page, run, paste as Markdown\n  \
            sbmd notes.md --to scrapbox         # Convert a file (outputs to stdout)\n  \
            cat page.sb | sbmd convert --to md  # Convert stdin"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Convert a document between dialects.\n\n\
                    Dialects:\n  \
                    - markdown (md):          .md, .markdown\n  \
                    - scrapbox (sb, cosense): .sb, .scrapbox, .cosense\n\n\
                    The source dialect is detected from the input file extension, and\n\
                    otherwise taken to be the opposite of --to.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    sbmd convert notes.md --to scrapbox         # Convert to stdout\n  \
                    sbmd convert page.sb --to md -o page.md     # Convert to a file\n  \
                    pbpaste | sbmd convert --to sb              # Read stdin"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path ('-' or omitted for stdin)")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source dialect (detected from the file extension if not specified)")
                        .value_parser(PossibleValuesParser::new(DIALECTS))
                        .ignore_case(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target dialect (required)")
                        .required(true)
                        .value_parser(PossibleValuesParser::new(DIALECTS))
                        .ignore_case(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means `convert`
            if args.len() > 1
                && !args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => exit_with_clap_error(e2),
                }
            } else {
                exit_with_clap_error(e);
            }
        }
    };

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_flag("quiet"),
    );
    init_tracing(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("md2sb", _)) => handle_clipboard_command(Direction::MarkdownToScrapbox, &config),
        Some(("sb2md", _)) => handle_clipboard_command(Direction::ScrapboxToMarkdown, &config),
        Some(("convert", sub_matches)) => {
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(EXIT_USAGE);
        }
    }
}

/// Print a clap error (or help/version output) and exit.
///
/// Parse errors use the usage exit code instead of clap's default of 2, which
/// is reserved for clipboard and file failures.
fn exit_with_clap_error(err: clap::Error) -> ! {
    let _ = err.print();
    std::process::exit(if err.use_stderr() { EXIT_USAGE } else { 0 });
}

/// Handle the md2sb / sb2md commands
fn handle_clipboard_command(direction: Direction, config: &SbmdConfig) {
    let mut clipboard = SystemClipboard::new().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(EXIT_IO_ERROR);
    });

    match run_clipboard_session(&mut clipboard, direction) {
        Ok(outcome @ SessionOutcome::Converted { .. }) => {
            if !config.status.quiet {
                println!("{}", status::clipboard_converted(direction, config.status.emoji));
                if config.clipboard.hold && cfg!(target_os = "linux") {
                    eprintln!("{}", status::clipboard_held(config.status.emoji));
                }
            }
            let _ = std::io::stdout().flush();

            if let Err(e) = hold_clipboard(&mut clipboard, &outcome, config.clipboard.hold) {
                eprintln!("Error: {e:#}");
                std::process::exit(EXIT_IO_ERROR);
            }
        }
        Ok(SessionOutcome::EmptyInput) => {
            eprintln!(
                "{}",
                status::clipboard_empty(direction.source(), config.status.emoji)
            );
            std::process::exit(EXIT_EMPTY_INPUT);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(EXIT_IO_ERROR);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: Option<&str>,
    from: Option<&str>,
    to: &str,
    output: Option<&str>,
    config: &SbmdConfig,
) {
    let registry = ConverterRegistry::default();
    let input = Stream::from_arg(input);

    let direction = resolve_direction(&registry, from, to, input.path()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(EXIT_USAGE);
    });
    let converter = registry.get_direction(direction).unwrap_or_else(|| {
        eprintln!("Error: no converter registered for {}", direction.label());
        std::process::exit(EXIT_USAGE);
    });

    let source = input.read_to_string().unwrap_or_else(|e| {
        eprintln!("{e:#}");
        std::process::exit(EXIT_IO_ERROR);
    });
    if source.is_empty() {
        eprintln!("{}", status::input_empty(input.path(), config.status.emoji));
        std::process::exit(EXIT_EMPTY_INPUT);
    }

    tracing::debug!(converter = converter.name(), "converting input");
    let converted = finish_output(converter.convert(&source), config.output.trailing_newline);

    let output = Stream::from_arg(output);
    output.write(&converted).unwrap_or_else(|e| {
        eprintln!("{e:#}");
        std::process::exit(EXIT_IO_ERROR);
    });

    if let Some(path) = output.path() {
        if !config.status.quiet {
            println!("{}", status::file_written(direction, path, config.status.emoji));
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Dialects:");
    for dialect in Dialect::ALL {
        println!(
            "  {:<10} .{}",
            dialect.name(),
            dialect.file_extensions().join(", .")
        );
    }

    println!("\nConverters:");
    let registry = ConverterRegistry::default();
    for direction in [Direction::MarkdownToScrapbox, Direction::ScrapboxToMarkdown] {
        if let Some(converter) = registry.get_direction(direction) {
            println!("  {:<22} {}", converter.name(), converter.description());
        }
    }
}

/// Work out the conversion direction for `convert`.
///
/// An explicit `--from` wins, then the input file extension, then the
/// opposite of the target dialect.
fn resolve_direction(
    registry: &ConverterRegistry,
    from: Option<&str>,
    to: &str,
    input_path: Option<&str>,
) -> Result<Direction, BabelError> {
    let target: Dialect = to.parse()?;
    let source = match from {
        Some(name) => name.parse()?,
        None => input_path
            .and_then(|path| registry.detect_dialect_from_filename(path))
            .unwrap_or_else(|| target.counterpart()),
    };

    Direction::from_dialects(source, target).ok_or_else(|| BabelError::ConverterNotFound {
        from: source.name().to_string(),
        to: target.name().to_string(),
    })
}

fn load_cli_config(explicit_path: Option<&str>, quiet: bool) -> SbmdConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = if quiet {
        loader.set_override("status.quiet", true)
    } else {
        Ok(loader)
    };

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(EXIT_USAGE);
    })
}

/// Logs go to stderr; `SBMD_LOG` takes precedence over `logging.filter`.
fn init_tracing(config: &SbmdConfig) {
    let filter = EnvFilter::try_from_env("SBMD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

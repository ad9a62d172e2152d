// Command-line interface for carta
//
// carta turns the reply of the text-generation service into the service
// description artifacts: the compiled markup, its HTML rendering and the
// plain-text reduction. All the work is done by the carta-babel library; this
// binary only reads files, applies configuration and writes results.
//
// Usage:
//  carta <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  carta convert <input> --to <format> [--from <format>] [-o <file>] - Same as above (explicit)
//  carta export <input> [--dir <dir>]   - Write the .md and .txt downloads
//  carta sections                        - List the section catalogue
//  carta --list-formats                  - List available formats
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; unknown keys are passed to the
// target format.
// Example:
//  carta reply.json --to html --extra-standalone --extra-title "IPTU"

use carta_babel::export::{export_markdown, export_text, Artifact};
use carta_babel::{parse_response, CartaError, FormatRegistry, Session, SECTIONS};
use carta_config::{CartaConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const SUBCOMMANDS: &[&str] = &["convert", "export", "sections", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// When the first argument looks like a file rather than a subcommand,
/// return the arguments with `convert` injected.
fn inject_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    if first.starts_with('-') || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }

    let mut injected = vec![args[0].clone(), "convert".to_string()];
    injected.extend_from_slice(&args[1..]);
    Some(injected)
}

fn build_cli() -> Command {
    Command::new("carta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile, render and export service descriptions")
        .long_about(
            "carta works on the replies of the service description generator.\n\n\
            Commands:\n  \
            - convert:  Transform a reply or a compiled document between formats\n  \
            - export:   Write the markdown and plain-text downloads\n  \
            - sections: List the fixed section catalogue\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            carta reply.json --to markdown              # Compiled markup (stdout)\n  \
            carta reply.json --to html -o out.html      # HTML fragment file\n  \
            carta reply.json --to html --extra-standalone\n  \
            carta export reply.json --dir downloads"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a carta.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert a document between formats.\n\n\
                    Supported formats:\n  \
                    - json:     Service reply (.json), input only\n  \
                    - markdown: Compiled markup (.md)\n  \
                    - html:     HTML fragment or standalone page (.html), output only\n  \
                    - text:     Plain text (.txt), output only\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file."
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
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
        .subcommand(
            Command::new("export")
                .about("Write the markdown and plain-text downloads for a reply")
                .long_about(
                    "Run a full attempt on a service reply and write both downloads.\n\n\
                    File names come from the [export] configuration section.\n\
                    Nothing is written when the reply failed or compiled to nothing."
                )
                .arg(
                    Arg::new("input")
                        .help("Service reply file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .short('d')
                        .help("Directory to write into (defaults to the current directory)")
                        .default_value(".")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(Command::new("sections").about("List the section catalogue in output order"))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match inject_default_subcommand(&cleaned_args) {
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match FormatRegistry::default().detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("export", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let dir = sub_matches
                .get_one::<String>("dir")
                .expect("dir has a default");
            handle_export_command(input, Path::new(dir), &config);
        }
        Some(("sections", _)) => handle_sections_command(),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &CartaConfig,
) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = read_input(input);
    tracing::info!(input, from, to, "converting");

    let doc = registry.parse(&source, from).unwrap_or_else(|e| exit_with(&e));

    let mut format_options = HashMap::new();
    if to == "html" {
        format_options.insert(
            "standalone".to_string(),
            config.convert.html.standalone.to_string(),
        );
        format_options.insert("title".to_string(), config.convert.html.title.clone());
    }
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the export command: one full attempt, then both downloads.
fn handle_export_command(input: &str, dir: &Path, config: &CartaConfig) {
    let source = read_input(input);

    let mut session = Session::new();
    session
        .begin_attempt(&source)
        .unwrap_or_else(|e| exit_with(&e));
    let response = parse_response(&source).unwrap_or_else(|e| exit_with(&e));
    session
        .complete_attempt(response)
        .unwrap_or_else(|e| exit_with(&e));

    // Both artifacts are built before anything touches the disk.
    let artifacts = export_markdown(&session, &config.export.markdown_file_name)
        .and_then(|markdown| {
            export_text(&session, &config.export.text_file_name).map(|text| [markdown, text])
        })
        .unwrap_or_else(|e| exit_with(&e));

    for artifact in &artifacts {
        write_artifact(dir, artifact);
    }
}

fn write_artifact(dir: &Path, artifact: &Artifact) {
    let path = dir.join(&artifact.file_name);
    fs::write(&path, &artifact.bytes).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {e}", path.display());
        std::process::exit(1);
    });
    println!("{} ({})", path.display(), artifact.media_type);
}

/// Handle the sections command
fn handle_sections_command() {
    for spec in SECTIONS.iter() {
        println!("{:<24} {}", spec.key.as_str(), spec.title);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        };
        println!(
            "  {name:<10} {direction:<7} .{:<10} {}",
            format.file_extensions().join(" ."),
            format.description()
        );
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn exit_with(err: &CartaError) -> ! {
    tracing::debug!(?err, "command failed");
    eprintln!("{err}");
    std::process::exit(1);
}

fn load_cli_config(explicit_path: Option<&str>) -> CartaConfig {
    let loader = Loader::new().with_optional_file("carta.toml");
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

fn init_logging(config: &CartaConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn apply_config_overrides(config: &mut CartaConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("standalone") {
        config.convert.html.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(title) = extra_params.remove("title") {
        config.convert.html.title = title;
    }
    if let Some(name) = take_override(extra_params, &["markdown-file-name", "md-name"]) {
        config.export.markdown_file_name = name;
    }
    if let Some(name) = take_override(extra_params, &["text-file-name", "txt-name"]) {
        config.export.text_file_name = name;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

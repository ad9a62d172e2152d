use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names registered by carta-babel's FormatRegistry.
// Build scripts can't access src/ modules or the library itself.
const AVAILABLE_FORMATS: &[&str] = &["html", "json", "markdown", "text"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let format_arg = |name: &'static str| {
        Arg::new(name)
            .long(name)
            .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
            .value_hint(ValueHint::Other)
    };

    let mut cmd = Command::new("carta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile, render and export service descriptions")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(format_arg("from"))
                .arg(format_arg("to").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("export")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .short('d')
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(Command::new("sections"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "carta", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "carta", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "carta", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

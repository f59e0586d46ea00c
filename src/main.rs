use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use searchdata::io_utils::{extension_error, fragment_cli_error, io_cli_error, simple_cli_error};
use searchdata::{
    builtin, decode_fragment, encode_fragment, validate_with, LintOptions, SearchIndex,
};

/// Inspect and check generated documentation search fragments.
#[derive(Parser)]
#[command(name = "searchdata", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a fragment and check its invariants.
    Lint {
        /// Input .js fragment
        input: PathBuf,
        /// Accept an additional URL scheme (may be repeated)
        #[arg(long = "scheme", value_name = "SCHEME")]
        schemes: Vec<String>,
        /// Skip the ascending-key check
        #[arg(long)]
        unsorted: bool,
    },
    /// Print a table as JSON or CSV.
    Dump {
        /// Input .js fragment
        input: Option<PathBuf>,
        /// Use the bundled table instead of a file
        #[arg(long, conflicts_with = "input")]
        builtin: bool,
        #[arg(long, value_enum, default_value = "json")]
        format: DumpFormat,
    },
    /// Rewrite a fragment in canonical form.
    Fmt {
        /// Input .js fragment
        input: PathBuf,
        /// Output path; stdout when omitted
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DumpFormat {
    Json,
    Csv,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn load_fragment(path: &Path) -> Result<SearchIndex, Box<dyn std::error::Error>> {
    if path
        .extension()
        .and_then(|s| s.to_str())
        .map_or(true, |ext| ext.to_ascii_lowercase() != "js")
    {
        return Err(extension_error(path).into());
    }
    let text =
        fs::read_to_string(path).map_err(|e| io_cli_error("reading input file", path, e))?;
    let index = decode_fragment(&text).map_err(|e| fragment_cli_error("decode failed", e))?;
    Ok(index)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Lint {
            input,
            schemes,
            unsorted,
        } => {
            let index = load_fragment(&input)?;
            let mut opts = LintOptions::default();
            opts.allowed_schemes.extend(schemes);
            if unsorted {
                opts.require_sorted = false;
            }
            validate_with(&index, &opts).map_err(|e| fragment_cli_error("lint failed", e))?;
            println!(
                "{}: {} entries, {} targets, fingerprint {}",
                input.display(),
                index.len(),
                index.target_count(),
                index.fingerprint()
            );
            Ok(())
        }
        Command::Dump {
            input,
            builtin: use_builtin,
            format,
        } => {
            let index = match (use_builtin, input) {
                (true, _) => builtin(),
                (false, Some(path)) => load_fragment(&path)?,
                (false, None) => {
                    return Err(simple_cli_error("dump needs an input file or --builtin").into())
                }
            };
            match format {
                DumpFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(index.entries())?);
                }
                DumpFormat::Csv => {
                    let mut wtr = csv::Writer::from_writer(std::io::stdout());
                    wtr.write_record(["key", "label", "url", "scope_flag", "qualified_name"])?;
                    for entry in &index {
                        for target in &entry.targets {
                            let flag = target.scope_flag.0.to_string();
                            wtr.write_record([
                                entry.key.as_str(),
                                entry.label.as_str(),
                                target.url.as_str(),
                                flag.as_str(),
                                target.qualified_name.as_str(),
                            ])?;
                        }
                    }
                    wtr.flush()?;
                }
            }
            Ok(())
        }
        Command::Fmt { input, output } => {
            let index = load_fragment(&input)?;
            let text = encode_fragment(&index);
            match output {
                Some(path) => fs::write(&path, text)
                    .map_err(|e| io_cli_error("writing output file", &path, e))?,
                None => {
                    std::io::stdout().write_all(text.as_bytes())?;
                }
            }
            Ok(())
        }
    }
}

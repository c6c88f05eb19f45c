//! truthdiff - Cell-by-cell comparison of integer tables

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use truthdiff::config::{Config, OutputFormat};
use truthdiff::diff::compare_files;
use truthdiff::output::render_to_stdout;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Compare a computed CSV file against a ground truth CSV file
#[derive(Parser, Debug)]
#[command(name = "truthdiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to ground truth csv file
    #[arg(short = 't', long = "truth_file")]
    truth_file: PathBuf,

    /// Path to computed csv file to be tested against the ground truth value
    #[arg(short = 'e', long = "test_file")]
    test_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", cli.delimiter);
    }

    let config = Config::new(cli.truth_file, cli.test_file)
        .with_output_format(cli.format.into())
        .with_delimiter(cli.delimiter as u8)
        .with_quiet(cli.quiet);

    let comparison = compare_files(&config)?;

    render_to_stdout(
        &comparison,
        &config.truth_file,
        &config.test_file,
        config.output_format,
        config.quiet,
    )?;

    Ok(())
}

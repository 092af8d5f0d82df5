//! `ssp`: enumerate subset-sum solutions.
//!
//! - `ssp <n>` - generate and solve a random instance of size `n`
//! - `ssp <file>` - solve the instance stored in a problem file
//! - `ssp <dir>` - solve every `.txt` problem file in a directory

use clap::{CommandFactory, Parser};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::process::ExitCode;
use subset_sum::driver::{self, Source};
use subset_sum::{Instance, SearchConfig, DISPLAY_LIMIT, MAX_SOLUTIONS};
use tracing::Level;

#[derive(Parser)]
#[command(name = "ssp")]
#[command(about = "Enumerate all subsets of a set of positive integers summing to a target")]
#[command(version)]
struct Cli {
    /// Instance size, problem file, or directory of problem files
    input: Option<String>,
    /// Seed for random instance generation
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum number of solutions kept in memory
    #[arg(long, default_value_t = MAX_SOLUTIONS)]
    max_solutions: usize,
    /// List solutions when fewer than this many are found, otherwise print their count
    #[arg(long, default_value_t = DISPLAY_LIMIT)]
    display_limit: usize,
    /// Extension of the problem files read in directory mode
    #[arg(long, default_value = "txt")]
    extension: String,
    /// Show debug logging on standard error
    #[arg(short, long)]
    verbose: bool,
}

fn run(input: &str, cli: &Cli) -> subset_sum::Result<()> {
    let config = SearchConfig {
        max_solutions: cli.max_solutions,
        display_limit: cli.display_limit,
    };

    match Source::classify(input)? {
        Source::Size(n) => {
            let instance = match cli.seed {
                Some(seed) => {
                    Instance::from_size_with_rng(n, &mut ChaCha8Rng::seed_from_u64(seed))?
                }
                None => Instance::from_size(n)?,
            };
            println!("{}", driver::run_instance(instance, &config));
        }
        Source::File(path) => {
            println!("{}", driver::run_file(&path, &config)?);
        }
        Source::Directory(dir) => {
            driver::process_directory(&dir, &cli.extension, &config, |path, result| {
                let name = file_name(path);
                println!("Processing file: {name}");
                match result {
                    Ok(report) => println!("{report}"),
                    Err(e) => eprintln!("Error while processing file {name}: {e}"),
                }
            })?;
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let Some(input) = cli.input.as_deref() else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    match run(input, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

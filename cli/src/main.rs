use clap::Parser;
use colored::Colorize;
use error::CliErrors;
use mass_properties::CenterOfMassConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, info};

mod error;
mod input;
mod prompts;
mod report;

/// Computes the center of mass of a set of point particles.
#[derive(Debug, Parser)]
#[command(name = "com", version)]
struct Cli {
    /// RON file with the center of mass configuration, e.g. `(formula: Signed, precision: 40)`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RON file with the particles; prompts for them interactively when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn run(cli: &Cli) -> Result<String, CliErrors> {
    let config = match &cli.config {
        Some(path) => CenterOfMassConfig::from_path(path)?,
        None => CenterOfMassConfig::default(),
    };
    info!(formula = ?config.formula, precision = config.precision, "configuration");

    let particles = match &cli.input {
        Some(path) => input::load_particles(path)?,
        None => prompts::prompt_particles()?,
    };
    if particles.is_empty() {
        return Err(CliErrors::NoParticles);
    }

    report::render(&particles, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(report) => {
            println!();
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "[Error]:".red().bold());
            ExitCode::FAILURE
        }
    }
}

//! ormshift: turn model snapshots into EF Core sources.

use clap::{Parser, Subcommand};
use ormshift::{
    config::{CONFIG_FILE_NAME, Config},
    pipeline::{generator_for, verify_fingerprint},
    prelude::*,
};
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ormshift", version)]
#[command(about = "Translate legacy ORM mapping snapshots into EF Core sources")]
struct Cli {
    /// Config file (defaults to ./ormshift.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline progress at info level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate sources and write them to the output directory
    Generate {
        /// Model snapshot (JSON); repeat for several front-end outputs
        #[arg(short, long = "model", required = true)]
        models: Vec<PathBuf>,

        /// Output directory, overriding the config
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Refuse to write unless the output fingerprint matches
        #[arg(long)]
        check: Option<String>,
    },

    /// Print the fingerprint of the sources a batch would generate
    Fingerprint {
        #[arg(short, long = "model", required = true)]
        models: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(CONFIG_FILE_NAME)?,
    };

    match cli.command {
        Command::Generate { models, out, check } => {
            let sources = generate(&models, &config)?;
            let fingerprint = sources.fingerprint();
            info!(%fingerprint, "generated sources fingerprinted");
            if let Some(expected) = check {
                verify_fingerprint(&fingerprint, &expected)?;
            }

            let dir = config.output.resolved_dir(out.as_deref());
            let written = sources.write_to(dir, &config.output)?;
            info!(files = written.len(), dir = %dir.display(), "generation finished");

            for path in &written {
                println!("{}", path.display());
            }
            println!("{fingerprint}");
        }
        Command::Fingerprint { models } => {
            let fingerprint = generate(&models, &config)?.fingerprint();
            info!(%fingerprint, "generated sources fingerprinted");
            println!("{fingerprint}");
        }
    }

    Ok(())
}

// generate
fn generate(models: &[PathBuf], config: &Config) -> Result<GeneratedSources, Error> {
    let mut batch = Batch::new();
    for path in models {
        let text = read_model(path)?;
        batch.extend(SnapshotExtractor.extract_all(&text)?);
    }

    let prepared = batch.prepare(&PrepareOptions::from(&config.generate))?;

    Ok(prepared.generate(&generator_for(&config.generate)))
}

fn read_model(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

// setup_logging
// RUST_LOG wins over --verbose
fn setup_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

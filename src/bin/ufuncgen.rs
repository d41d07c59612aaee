use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ufuncgen::{generate_file, GenResult, GeneratorConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// DSL source describing the ufuncs
    source: PathBuf,

    /// Header file to write
    target: PathBuf,

    /// Path to config file
    #[arg(short, long, default_value = "ufuncgen.json")]
    config: PathBuf,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> GenResult<()> {
    let config = if cli.config.exists() {
        let config = GeneratorConfig::from_file(&cli.config)?;
        info!("config loaded from {}.", cli.config.display());
        config
    } else {
        GeneratorConfig::default()
    };

    debug!("config: {:?}", config);

    let report = generate_file(&cli.source, &cli.target, &config)?;
    debug!("report: {:?}", report);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        if e.is_input_error() {
            warn!("{} may be incomplete", cli.target.display());
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

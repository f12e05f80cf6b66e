mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_compare, handle_profiles, handle_split, Cli, Commands};
use splitkit_config::{ConfigError, ErrorFormatter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ConfigError>() {
                Some(config_err) => eprintln!("{}", ErrorFormatter::new(config_err)),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Split {
            file,
            mode,
            format,
            overrides,
        } => handle_split(config_path, file.as_deref(), mode, format, &overrides)?,
        Commands::Compare { file, overrides } => {
            handle_compare(config_path, file.as_deref(), &overrides)?
        }
        Commands::Profiles => handle_profiles()?,
    }

    Ok(())
}

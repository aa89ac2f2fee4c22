use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use club_cli::commands::{check, run};
use club_cli::error::{UNEXPECTED_EXIT_CODE, USAGE_EXIT_CODE};
use club_cli::{Cli, Commands, Config, OutputFormat, RunError};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout carries only the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(run_err) = err.downcast_ref::<RunError>() {
                println!("{}", run_err.subject());
                println!("{run_err}");
                ExitCode::from(run_err.exit_code())
            } else {
                eprintln!("error: {err:#}");
                ExitCode::from(UNEXPECTED_EXIT_CODE)
            }
        }
    }
}

fn dispatch(cli: &Cli) -> Result<()> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Commands::Run { file, json }) => {
            let format = if *json { OutputFormat::Json } else { config.format };
            run::run(&mut stdout, file, &config, format)
        }
        Some(Commands::Check { file }) => check::run(&mut stdout, file, &config),
        None => {
            Cli::command()
                .print_help()
                .context("failed to print help")?;
            Ok(())
        }
    }
}

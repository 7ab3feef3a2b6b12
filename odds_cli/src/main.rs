//! combat-odds - Command-line shell for the combat odds calculator

mod args;
mod render;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use odds_core::CombatOddsCalculator;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli
        .simulation_config()
        .context("Failed to load simulation config")?;
    let calculator = CombatOddsCalculator::new(config).with_mode(cli.chart.into());

    match calculator.calculate(&cli.combat_input()) {
        Ok(report) => {
            if cli.json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", render::render_report(&report));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            // The message takes the place of the results
            println!("{}", render::render_error(&err));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod handlers;
pub mod models;

use crate::handlers::{normalize, price, translate};
use crate::models::args::{AppCommands, Cli};

use anyhow::{Context as _, Result};
use brigade::Context;
use brigade::domain::config::AppConfig;
use brigade::kernel::config::load_config;
use brigade_logger::Logger;
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: AppConfig =
        load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut logging = config.logging.clone();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    let _logger = Logger::from_config("brigade", &logging)?;
    debug!(file = ?cli.config, "Configuration loaded");

    // Built after the subscriber so catalog and locale warnings are visible.
    let context = Context::from_config(config).context("Failed to load translations")?;

    let output = match &cli.command {
        AppCommands::Normalize { file, pretty } => normalize::normalize(file.as_deref(), *pretty)?,
        AppCommands::Price(args) => price::price(args, &context.translator),
        AppCommands::Translate(args) => translate::translate(args, &context.translator)?,
    };

    println!("{output}");
    Ok(())
}

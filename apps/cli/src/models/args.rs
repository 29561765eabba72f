//! # CLI Argument Definitions

use brigade::kernel::i18n::Locale;
use brigade::menu::Currency;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "brigade")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Recipe, price and translation tools for the restaurant admin")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML). Defaults to `brigade.*` when present.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print a recipe in canonical form
    Normalize {
        /// Recipe JSON file; stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Format an amount given in minor units (cents)
    Price(PriceArgs),
    /// Look up a translation key
    Translate(TranslateArgs),
}

#[derive(Debug, Args)]
pub struct PriceArgs {
    #[arg(allow_negative_numbers = true)]
    pub minor: i64,

    #[arg(long, default_value = "EUR", value_parser = parse_currency)]
    pub currency: Currency,

    /// Overrides `i18n.locale`
    #[arg(short, long, value_parser = parse_locale)]
    pub locale: Option<Locale>,
}

#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Dot-separated key, e.g. `ingredients.form.name`
    pub key: String,

    /// Overrides `i18n.locale`
    #[arg(short, long, value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Extra JSON catalog merged into the active locale
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Placeholder value, repeatable: `--arg status=404`
    #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_placeholder)]
    pub args: Vec<(String, String)>,
}

fn parse_locale(tag: &str) -> Result<Locale, String> {
    Locale::parse(tag).ok_or_else(|| format!("unsupported locale '{tag}'"))
}

fn parse_currency(code: &str) -> Result<Currency, String> {
    Currency::parse(code).map_err(|e| e.to_string())
}

fn parse_placeholder(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

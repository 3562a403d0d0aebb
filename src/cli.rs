use std::path::PathBuf;

use clap::{Parser, Subcommand};
use universal_converter_lib::Category;

#[derive(Parser)]
#[command(name = "universal-converter")]
#[command(about = "Convert length, weight, temperature and currency - by form or in plain English.")]
pub struct CommandLine {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value between two named units of a category
    #[command(alias = "c")]
    Convert {
        /// Length, Weight, Temperature or Currency
        category: Category,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit (e.g. Meters) or currency code (e.g. USD)
        from: String,
        /// Target unit (e.g. Feet) or currency code (e.g. EUR)
        to: String,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a plain-English query, e.g. "convert 5 meters to feet"
    #[command(alias = "a")]
    Ask {
        #[arg(required = true)]
        text: Vec<String>,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the units of one or every category
    #[command(alias = "u")]
    Units { category: Option<Category> },
    /// Read plain-English queries line by line
    #[command(alias = "s")]
    Shell,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

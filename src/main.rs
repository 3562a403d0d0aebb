//! Universal Converter
//!
//! Command line front end: one-shot form and text conversions plus an
//! interactive prompt.

mod cli;
mod terminal;

use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::warn;

use cli::{CommandLine, Commands};
use universal_converter_lib::core::features::currency::ExchangeRateClient;
use universal_converter_lib::shared::settings::AppSettings;
use universal_converter_lib::{
    convert_text_command, convert_units_command, get_units_command, ConvertUnitsRequest,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    terminal::init_logging();

    let loaded = match &commands.settings {
        Some(path) => AppSettings::load_from(path).await,
        None => AppSettings::load().await,
    };
    // Physical conversions never need settings; fall back to defaults
    let settings = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "failed to load settings, using defaults");
        AppSettings::default()
    });
    let provider = ExchangeRateClient::from_settings(&settings);

    match commands.command {
        Commands::Convert { category, value, from, to, json } => {
            let request = ConvertUnitsRequest {
                category,
                value,
                from_unit: from,
                to_unit: to,
            };
            let response = convert_units_command(&provider, request).await?;
            terminal::print_response(&response, json)
        }
        Commands::Ask { text, json } => {
            let response = convert_text_command(&provider, &text.join(" ")).await?;
            terminal::print_response(&response, json)
        }
        Commands::Units { category } => {
            terminal::print_units(&get_units_command(category));
            Ok(())
        }
        Commands::Shell => shell(&provider).await,
    }
}

async fn shell(provider: &ExchangeRateClient) -> anyhow::Result<()> {
    println!("Type your conversion in plain English (e.g., 'Convert 5 meters to feet'). 'quit' exits.");
    let mut lines = BufReader::new(stdin()).lines();

    loop {
        terminal::prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
            break;
        }

        match convert_text_command(provider, query).await {
            Ok(response) => println!("{}", response.summary()),
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}

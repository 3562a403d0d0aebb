use std::io::Write;

use tracing_subscriber::EnvFilter;
use universal_converter_lib::shared::types::{ConvertUnitsResponse, GetUnitsResponse};

/// Log to stderr so stdout only carries results. `RUST_LOG` overrides the default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn print_response(response: &ConvertUnitsResponse, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", response.summary());
    }
    Ok(())
}

pub fn print_units(listing: &GetUnitsResponse) {
    let mut current = None;
    for unit in &listing.units {
        if current != Some(unit.category) {
            println!("{}:", unit.category);
            current = Some(unit.category);
        }
        println!("  {:<12} {}", unit.id, unit.aliases.join(", "));
    }
}

pub fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

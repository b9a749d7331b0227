//! modem-snapshot - prints the state of every cellular modem ModemManager knows.

use std::{error::Error, process};

use clap::Parser;
use modem_snapshot::{
    cli::{
        Args,
        formatting::{format_error, format_records},
    },
    config::Config,
    services::modem_manager::ModemService,
    tracing_config,
};
use tracing::{Level, span};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if args.print_config_schema {
        println!("{}", serde_json::to_string_pretty(&Config::schema())?);
        return Ok(());
    }

    let config = args.resolve_config()?;

    tracing_config::init(&config.general)?;
    let _span = span!(Level::INFO, "modem_snapshot").entered();

    let mut service = match ModemService::connect(config.aggregation).await {
        Ok(service) => service,
        Err(err) => {
            eprintln!("{}", format_error("Failed to initialize modem API"));
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let result = service.snapshot().await;
    service.disconnect();

    match result {
        Ok(records) if args.json => println!("{}", serde_json::to_string_pretty(&records)?),
        Ok(records) => print!("{}", format_records(&records)),
        Err(err) => {
            eprintln!(
                "{}",
                format_error(&format!("Error getting modem properties: {err}"))
            );
            process::exit(1);
        }
    }

    Ok(())
}

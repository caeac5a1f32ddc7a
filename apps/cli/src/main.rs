use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use epod_tickets::cli::CliArgs;
use epod_tickets::config::init_build_config;
use epod_tickets::process::{build_dataset, RunSummary};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_build_config();
    init_logging(config.debug);

    let summary = build_dataset(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_summary(&summary);
    }

    Ok(())
}

// --debug beats RUST_LOG; otherwise RUST_LOG beats the info default
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_summary(summary: &RunSummary) {
    println!("\nEPOD Ticket Dataset");
    println!("===================");
    println!("CSV files found: {}", summary.files_seen);
    println!("Files skipped: {}", summary.files_skipped);
    println!("Customers: {}", summary.customers);
    println!("Tickets: {}", summary.tickets);

    match &summary.output {
        Some(path) => println!("Data saved to {}", path.display()),
        None => println!("No data was written"),
    }
}

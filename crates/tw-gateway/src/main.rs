//! TinyWindow gateway - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// TinyWindow signing and execution gateway
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via TW_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Print metrics in Prometheus text format before exiting
    #[arg(long)]
    metrics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tw_telemetry::init_logging()?;

    info!("Starting TinyWindow gateway v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > TW_CONFIG env var > defaults
    let config_path = args.config.or_else(|| std::env::var("TW_CONFIG").ok());

    let config = match config_path {
        Some(path) => {
            info!(config_path = %path, "Loading configuration");
            tw_gateway::AppConfig::from_file(&path)?
        }
        None => {
            info!("No configuration file given; using defaults");
            tw_gateway::AppConfig::default()
        }
    };

    let app = tw_gateway::Application::new(config)?;
    let ack = app.run_demo().await?;
    info!(order_id = %ack.order_id, accepted = ack.accepted, "gateway demo complete");

    if args.metrics {
        println!("{}", tw_telemetry::metrics_text()?);
    }

    Ok(())
}

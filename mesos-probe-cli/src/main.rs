//! Mesos Probe CLI
//!
//! Command-line interface for inspecting and operating a Mesos master.

mod commands;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use mesos_probe_client::{ClientConfig, MasterClient};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mesos-probe")]
#[command(about = "Inspect and operate a Mesos master", long_about = None)]
struct Cli {
    /// Master URL
    #[arg(long, env = "MESOS_MASTER_URL", default_value = "http://localhost:5050")]
    master_url: String,

    /// Maximum time a single request may take, in seconds
    #[arg(long, env = "MESOS_WAIT_TIME", default_value_t = 30)]
    wait_time: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mesos_probe=info,mesos_probe_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.master_url)
        .with_wait_time(Duration::from_secs(cli.wait_time));
    config.validate()?;
    debug!(
        "Using master {} (wait time {:?})",
        config.master_url, config.wait_time
    );

    let client = MasterClient::from_config(&config);
    handle_command(cli.command, &client).await
}

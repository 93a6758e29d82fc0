//! Framework command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use mesos_probe_client::MasterClient;

/// Framework subcommands
#[derive(Subcommand)]
pub enum FrameworkCommands {
    /// List framework IDs and names
    List {
        /// List completed frameworks instead of active ones
        #[arg(long)]
        completed: bool,
    },
    /// Tear down a framework and kill its tasks
    Teardown {
        /// Framework ID
        id: String,
    },
}

/// Handle framework commands
pub async fn handle_framework_command(
    command: FrameworkCommands,
    client: &MasterClient,
) -> Result<()> {
    match command {
        FrameworkCommands::List { completed } => list_frameworks(client, completed).await,
        FrameworkCommands::Teardown { id } => teardown(client, &id).await,
    }
}

async fn list_frameworks(client: &MasterClient, completed: bool) -> Result<()> {
    let frameworks = client.fetch_frameworks().await?;
    let (label, list) = if completed {
        ("completed", &frameworks.completed_frameworks)
    } else {
        ("active", &frameworks.frameworks)
    };

    if list.is_empty() {
        println!("{}", format!("No {} frameworks.", label).yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} {} framework(s):", list.len(), label).bold()
    );
    for framework in list {
        println!("  {} {}  {}", "▸".cyan(), framework.id, framework.name.dimmed());
    }

    Ok(())
}

async fn teardown(client: &MasterClient, id: &str) -> Result<()> {
    let response = client.teardown(id).await?;
    println!(
        "{} Framework {} torn down (status {})",
        "✓".green(),
        id.bold(),
        response.status
    );
    Ok(())
}

//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod agent;
mod framework;
mod state;

pub use agent::AgentCommands;
pub use framework::FrameworkCommands;

use anyhow::Result;
use clap::Subcommand;
use mesos_probe_client::MasterClient;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show a summary of the cluster state
    State,
    /// Agent inspection and maintenance
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },
    /// Framework listing and teardown
    Framework {
        #[command(subcommand)]
        command: FrameworkCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, client: &MasterClient) -> Result<()> {
    match command {
        Commands::State => state::show_state(client).await,
        Commands::Agent { command } => agent::handle_agent_command(command, client).await,
        Commands::Framework { command } => {
            framework::handle_framework_command(command, client).await
        }
    }
}

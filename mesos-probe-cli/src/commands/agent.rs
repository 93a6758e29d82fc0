//! Agent command handlers
//!
//! Inspection of a single agent plus the operator maintenance calls
//! (drain, mark gone, reactivate).

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use mesos_probe_client::{MasterClient, RawResponse};
use mesos_probe_core::domain::{Agent, Resources};

/// Agent subcommands
#[derive(Subcommand)]
pub enum AgentCommands {
    /// Show attributes, resources and reservations of an agent
    Show {
        /// Agent ID
        id: String,
    },
    /// Drain an agent
    Drain {
        /// Agent ID
        id: String,

        /// Upper bound on the kill grace period of the agent's tasks
        #[arg(long)]
        max_grace_period: Option<i64>,

        /// Mark the agent gone once drained
        #[arg(long)]
        mark_gone: bool,
    },
    /// Mark an agent as gone
    MarkGone {
        /// Agent ID
        id: String,
    },
    /// Reactivate a drained agent
    Reactivate {
        /// Agent ID
        id: String,
    },
}

/// Handle agent commands
pub async fn handle_agent_command(command: AgentCommands, client: &MasterClient) -> Result<()> {
    match command {
        AgentCommands::Show { id } => show_agent(client, &id).await,
        AgentCommands::Drain {
            id,
            max_grace_period,
            mark_gone,
        } => {
            let response = client.drain_agent(&id, max_grace_period, mark_gone).await?;
            print_done("drained", &id, &response);
            Ok(())
        }
        AgentCommands::MarkGone { id } => {
            let response = client.mark_agent_gone(&id).await?;
            print_done("marked gone", &id, &response);
            Ok(())
        }
        AgentCommands::Reactivate { id } => {
            let response = client.reactivate_agent(&id).await?;
            print_done("reactivated", &id, &response);
            Ok(())
        }
    }
}

async fn show_agent(client: &MasterClient, id: &str) -> Result<()> {
    let state = client.fetch_state().await?;
    let Some(agent) = state.agent(id) else {
        bail!("No agent with ID {}", id);
    };

    print_agent_details(agent);
    Ok(())
}

fn print_agent_details(agent: &Agent) {
    println!("{} {}", "Agent".bold(), agent.id.cyan());
    println!();
    print_resources("Attributes", &agent.attributes);
    print_resources("Resources", &agent.resources);
    print_resources("Used", &agent.used_resources);
    print_resources("Offered", &agent.offered_resources);
    print_resources("Unreserved", &agent.unreserved_resources);

    if agent.reserved_resources.is_empty() {
        println!("  {:<12}{}", "Reserved:", "none".dimmed());
    } else {
        println!("  Reserved:");
        for (role, resources) in &agent.reserved_resources {
            println!("    {:<10}{}", role.yellow(), resources);
        }
    }
}

fn print_resources(label: &str, resources: &Resources) {
    let rendered = if resources.is_empty() {
        resources.to_string().dimmed()
    } else {
        resources.to_string().normal()
    };
    println!("  {:<12}{}", format!("{}:", label), rendered);
}

fn print_done(action: &str, id: &str, response: &RawResponse) {
    println!(
        "{} Agent {} {} (status {})",
        "✓".green(),
        id.bold(),
        action,
        response.status
    );
    if !response.body.is_empty() {
        println!("  {}", response.body.dimmed());
    }
}

//! Cluster state summary

use anyhow::Result;
use colored::*;
use mesos_probe_client::MasterClient;
use mesos_probe_core::domain::{Agent, Framework};

/// Print version, agents and frameworks
pub async fn show_state(client: &MasterClient) -> Result<()> {
    let state = client.fetch_state().await?;

    println!("{} {}", "Mesos master".bold(), state.version.cyan());
    if let Some(tag) = &state.git_tag {
        println!("  Git tag:      {}", tag.dimmed());
    }
    println!();

    if state.agents.is_empty() {
        println!("{}", "No agents registered.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} agent(s):", state.agents.len()).bold()
        );
        for agent in &state.agents {
            print_agent_line(agent);
        }
    }
    println!();

    print_framework_group("Active frameworks", &state.frameworks);
    print_framework_group("Completed frameworks", &state.completed_frameworks);

    if !state.unregistered_frameworks.is_empty() {
        println!("{}", "Unregistered frameworks:".bold());
        for id in &state.unregistered_frameworks {
            println!("  {} {}", "▸".cyan(), id.dimmed());
        }
    }

    Ok(())
}

fn print_agent_line(agent: &Agent) {
    let reserved = if agent.has_reservations() {
        " (reserved)".yellow().to_string()
    } else {
        String::new()
    };
    println!(
        "  {} {}{}  {}",
        "▸".cyan(),
        agent.id.bold(),
        reserved,
        agent.resources.to_string().dimmed()
    );
}

fn print_framework_group(title: &str, frameworks: &[Framework]) {
    if frameworks.is_empty() {
        return;
    }

    println!("{}", format!("{}:", title).bold());
    for framework in frameworks {
        println!(
            "  {} {} {}  {} running, {} unreachable",
            "▸".cyan(),
            framework.name.bold(),
            format!("({})", framework.id).dimmed(),
            framework.tasks.len().to_string().green(),
            framework.unreachable_tasks.len().to_string().red()
        );
    }
    println!();
}

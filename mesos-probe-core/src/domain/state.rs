//! Cluster state snapshot
//!
//! Decoded from `GET /state`. One value per query; nothing is refreshed in
//! place.

use serde::{Deserialize, Serialize};

use crate::domain::agent::Agent;
use crate::domain::framework::Framework;

/// Snapshot of the master's view of the cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterState {
    /// Master version (e.g. "1.9.0")
    pub version: String,

    /// Source-control tag the master was built from
    #[serde(default)]
    pub git_tag: Option<String>,

    /// Registered agents
    #[serde(rename = "slaves", default)]
    pub agents: Vec<Agent>,

    /// Active frameworks
    #[serde(default)]
    pub frameworks: Vec<Framework>,

    /// Frameworks that have terminated
    #[serde(default)]
    pub completed_frameworks: Vec<Framework>,

    /// IDs of frameworks with tasks but no registered scheduler
    #[serde(default)]
    pub unregistered_frameworks: Vec<String>,
}

impl ClusterState {
    /// Look up an agent by ID
    pub fn agent(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == agent_id)
    }

    /// Look up an active or completed framework by ID
    pub fn framework(&self, framework_id: &str) -> Option<&Framework> {
        self.frameworks
            .iter()
            .chain(self.completed_frameworks.iter())
            .find(|framework| framework.id == framework_id)
    }

    pub fn agent_ids(&self) -> Vec<String> {
        self.agents.iter().map(|agent| agent.id.clone()).collect()
    }
}

//! Agent domain model
//!
//! An agent is a worker node registered with the master. The master still
//! calls them "slaves" in `/state`, see [`crate::domain::ClusterState`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::resources::{Attributes, Resources};

/// An agent as reported by the master
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier assigned by the master
    pub id: String,

    /// Operator-defined attributes (rack, zone, ...)
    #[serde(default)]
    pub attributes: Attributes,

    /// Total resources of the agent
    #[serde(default)]
    pub resources: Resources,

    /// Resources allocated to running tasks
    #[serde(default)]
    pub used_resources: Resources,

    /// Resources currently offered to frameworks
    #[serde(default)]
    pub offered_resources: Resources,

    /// Reserved resources, keyed by role
    #[serde(default)]
    pub reserved_resources: BTreeMap<String, Resources>,

    /// Resources not reserved for any role
    #[serde(default)]
    pub unreserved_resources: Resources,
}

impl Agent {
    /// Reserved resources for one role
    pub fn reserved_for(&self, role: &str) -> Option<&Resources> {
        self.reserved_resources.get(role)
    }

    /// True if any role holds a non-empty reservation on this agent
    pub fn has_reservations(&self) -> bool {
        self.reserved_resources
            .values()
            .any(|resources| !resources.is_empty())
    }
}

//! Core domain types
//!
//! Read-only records decoded from master responses. Field names mirror the
//! master's JSON schema; none of these types are mutated after decoding.

pub mod agent;
pub mod framework;
pub mod resources;
pub mod state;

pub use agent::Agent;
pub use framework::{Framework, Frameworks, Task};
pub use resources::{Attributes, InvalidResourceValue, ResourceMap, ResourceValue, Resources};
pub use state::ClusterState;

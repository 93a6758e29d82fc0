//! Operator API calls
//!
//! Bodies for `POST /api/v1`. Each call is a JSON envelope whose `type`
//! names the call and whose payload sits under the snake_case call name.

use serde::{Deserialize, Serialize};

/// `{"value": ...}` wrapper used throughout the operator API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapped<T> {
    pub value: T,
}

impl<T> Wrapped<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Payload of a `MARK_AGENT_GONE` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAgentGone {
    pub agent_id: Wrapped<String>,
}

/// Payload of a `DRAIN_AGENT` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrainAgent {
    pub agent_id: Wrapped<String>,

    /// Whether the agent is marked gone once drained
    pub mark_gone: Wrapped<bool>,
}

/// Payload of a `REACTIVATE_AGENT` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactivateAgent {
    pub agent_id: Wrapped<String>,
}

/// A call to the master's operator API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorCall {
    MarkAgentGone {
        mark_agent_gone: MarkAgentGone,
    },
    DrainAgent {
        drain_agent: DrainAgent,

        /// Sits next to `type` and `drain_agent`, not inside the payload
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_grace_period: Option<Wrapped<i64>>,
    },
    ReactivateAgent {
        reactivate_agent: ReactivateAgent,
    },
}

impl OperatorCall {
    /// Mark an agent as gone; the master will refuse to re-register it
    pub fn mark_agent_gone(agent_id: impl Into<String>) -> Self {
        OperatorCall::MarkAgentGone {
            mark_agent_gone: MarkAgentGone {
                agent_id: Wrapped::new(agent_id.into()),
            },
        }
    }

    /// Drain an agent, optionally bounding the kill grace period of its tasks
    pub fn drain_agent(
        agent_id: impl Into<String>,
        max_grace_period: Option<i64>,
        mark_gone: bool,
    ) -> Self {
        OperatorCall::DrainAgent {
            drain_agent: DrainAgent {
                agent_id: Wrapped::new(agent_id.into()),
                mark_gone: Wrapped::new(mark_gone),
            },
            max_grace_period: max_grace_period.map(Wrapped::new),
        }
    }

    /// Reactivate a drained or deactivated agent
    pub fn reactivate_agent(agent_id: impl Into<String>) -> Self {
        OperatorCall::ReactivateAgent {
            reactivate_agent: ReactivateAgent {
                agent_id: Wrapped::new(agent_id.into()),
            },
        }
    }

    /// The `type` discriminant as sent on the wire
    pub fn call_type(&self) -> &'static str {
        match self {
            OperatorCall::MarkAgentGone { .. } => "MARK_AGENT_GONE",
            OperatorCall::DrainAgent { .. } => "DRAIN_AGENT",
            OperatorCall::ReactivateAgent { .. } => "REACTIVATE_AGENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mark_agent_gone_body() {
        let body = serde_json::to_value(OperatorCall::mark_agent_gone("agent-1")).unwrap();
        assert_eq!(
            body,
            json!({
                "type": "MARK_AGENT_GONE",
                "mark_agent_gone": {"agent_id": {"value": "agent-1"}}
            })
        );
    }

    #[test]
    fn test_drain_agent_without_grace_period() {
        let body = serde_json::to_string(&OperatorCall::drain_agent("agent-1", None, false)).unwrap();
        assert_eq!(
            body,
            r#"{"type":"DRAIN_AGENT","drain_agent":{"agent_id":{"value":"agent-1"},"mark_gone":{"value":false}}}"#
        );
    }

    #[test]
    fn test_drain_agent_with_grace_period() {
        let body = serde_json::to_value(OperatorCall::drain_agent("agent-1", Some(10), true)).unwrap();
        assert_eq!(
            body,
            json!({
                "type": "DRAIN_AGENT",
                "drain_agent": {
                    "agent_id": {"value": "agent-1"},
                    "mark_gone": {"value": true}
                },
                "max_grace_period": {"value": 10}
            })
        );
    }

    #[test]
    fn test_reactivate_agent_body() {
        let call = OperatorCall::reactivate_agent("agent-7");
        assert_eq!(call.call_type(), "REACTIVATE_AGENT");
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "type": "REACTIVATE_AGENT",
                "reactivate_agent": {"agent_id": {"value": "agent-7"}}
            })
        );
    }

    #[test]
    fn test_call_type_matches_serialized_tag() {
        for call in [
            OperatorCall::mark_agent_gone("a"),
            OperatorCall::drain_agent("a", Some(1), false),
            OperatorCall::reactivate_agent("a"),
        ] {
            let body = serde_json::to_value(&call).unwrap();
            assert_eq!(body["type"], call.call_type());
        }
    }
}

//! Operator API calls (`POST /api/v1`)

use mesos_probe_core::dto::operator::OperatorCall;
use tracing::{debug, info};

use crate::error::Result;
use crate::{MasterClient, RawResponse};

impl MasterClient {
    // =============================================================================
    // Agent Maintenance
    // =============================================================================

    /// Mark an agent as gone
    ///
    /// The master shuts the agent down and will not let it re-register.
    pub async fn mark_agent_gone(&self, agent_id: &str) -> Result<RawResponse> {
        self.operator_call(OperatorCall::mark_agent_gone(agent_id))
            .await
    }

    /// Drain an agent
    ///
    /// # Arguments
    /// * `agent_id` - The agent to drain
    /// * `max_grace_period` - Upper bound on the kill grace period of its tasks
    /// * `mark_as_gone` - Whether to mark the agent gone once drained
    pub async fn drain_agent(
        &self,
        agent_id: &str,
        max_grace_period: Option<i64>,
        mark_as_gone: bool,
    ) -> Result<RawResponse> {
        self.operator_call(OperatorCall::drain_agent(
            agent_id,
            max_grace_period,
            mark_as_gone,
        ))
        .await
    }

    /// Reactivate a drained agent so it receives offers again
    pub async fn reactivate_agent(&self, agent_id: &str) -> Result<RawResponse> {
        self.operator_call(OperatorCall::reactivate_agent(agent_id))
            .await
    }

    /// Send one call to the operator API
    pub async fn operator_call(&self, call: OperatorCall) -> Result<RawResponse> {
        let url = self.url("/api/v1");

        self.bounded(async {
            info!("Sending {} call", call.call_type());
            debug!("POST {}", url);
            let response = self.client.post(&url).json(&call).send().await?;

            self.handle_raw_response(response).await
        })
        .await
    }
}

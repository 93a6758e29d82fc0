//! Cluster state endpoint

use mesos_probe_core::domain::ClusterState;
use tracing::debug;

use crate::MasterClient;
use crate::error::Result;

impl MasterClient {
    /// Fetch a snapshot of the cluster
    ///
    /// Issues `GET {url}/state`.
    ///
    /// # Returns
    /// Agents, active and completed frameworks as seen by the master
    pub async fn fetch_state(&self) -> Result<ClusterState> {
        let url = self.url("/state");

        self.bounded(async {
            debug!("GET {}", url);
            let response = self.client.get(&url).send().await?;

            self.handle_response(response).await
        })
        .await
    }
}

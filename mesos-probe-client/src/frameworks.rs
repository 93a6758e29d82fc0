//! Framework-related API endpoints

use mesos_probe_core::domain::Frameworks;
use mesos_probe_core::dto::teardown::TeardownForm;
use tracing::{debug, info};

use crate::error::Result;
use crate::{MasterClient, RawResponse};

impl MasterClient {
    // =============================================================================
    // Framework Query
    // =============================================================================

    /// List active, completed and unregistered frameworks
    ///
    /// Issues `GET {url}/frameworks`.
    pub async fn fetch_frameworks(&self) -> Result<Frameworks> {
        let url = self.url("/frameworks");

        self.bounded(async {
            debug!("GET {}", url);
            let response = self.client.get(&url).send().await?;

            self.handle_response(response).await
        })
        .await
    }

    /// IDs of active frameworks, in the order the master reports them
    pub async fn framework_ids(&self) -> Result<Vec<String>> {
        Ok(self.fetch_frameworks().await?.ids())
    }

    /// IDs of completed frameworks, in the order the master reports them
    pub async fn completed_framework_ids(&self) -> Result<Vec<String>> {
        Ok(self.fetch_frameworks().await?.completed_ids())
    }

    // =============================================================================
    // Framework Teardown
    // =============================================================================

    /// Tear down a framework, killing all of its tasks
    ///
    /// Issues `POST {url}/teardown` with form body `frameworkId=<id>`.
    ///
    /// # Arguments
    /// * `framework_id` - The framework to shut down
    ///
    /// # Returns
    /// The master's response, undecoded
    ///
    /// # Example
    /// ```no_run
    /// # use mesos_probe_client::MasterClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = MasterClient::new("http://localhost:5050");
    /// for id in client.framework_ids().await? {
    ///     client.teardown(&id).await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn teardown(&self, framework_id: &str) -> Result<RawResponse> {
        let url = self.url("/teardown");
        let form = TeardownForm::new(framework_id);

        self.bounded(async {
            info!("Tearing down framework {}", framework_id);
            debug!("POST {}", url);
            let response = self.client.post(&url).form(&form).send().await?;

            self.handle_raw_response(response).await
        })
        .await
    }
}

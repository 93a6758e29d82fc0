//! Mesos Probe HTTP Client
//!
//! A small, type-safe client for the Mesos master REST API: cluster state,
//! framework listings, framework teardown and agent maintenance calls.
//!
//! Two flavours share the same operations:
//! - [`MasterClient`] is async and meant to be awaited on a tokio runtime.
//! - [`ClusterStateClient`] blocks the calling thread on a caller-supplied
//!   runtime handle, for synchronous test code.
//!
//! Every call is bounded by the configured wait time and fails with
//! [`ClientError::Timeout`] once it elapses. Nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use mesos_probe_client::MasterClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MasterClient::new("http://localhost:5050");
//!
//!     let state = client.fetch_state().await?;
//!     println!("Master {} with {} agent(s)", state.version, state.agents.len());
//!     Ok(())
//! }
//! ```

mod blocking;
pub mod config;
pub mod error;
mod frameworks;
mod operator;
mod response;
mod state;

// Re-export commonly used types
pub use blocking::ClusterStateClient;
pub use config::{ClientConfig, DEFAULT_WAIT_TIME};
pub use error::{ClientError, Result};
pub use response::RawResponse;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Async HTTP client for the Mesos master
#[derive(Debug, Clone)]
pub struct MasterClient {
    /// Base URL of the master (e.g., "http://localhost:5050")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Upper bound on a single call
    wait_time: Duration,
}

impl MasterClient {
    /// Create a new master client with the default wait time
    ///
    /// # Example
    /// ```
    /// use mesos_probe_client::MasterClient;
    ///
    /// let client = MasterClient::new("http://localhost:5050");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new master client with a custom HTTP client
    ///
    /// This allows you to configure proxies, TLS settings, etc. The wait
    /// time still applies on top of any timeout set on `client`.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            wait_time: DEFAULT_WAIT_TIME,
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.master_url.clone()).with_wait_time(config.wait_time)
    }

    /// Override the wait time
    pub fn with_wait_time(mut self, wait_time: Duration) -> Self {
        self.wait_time = wait_time;
        self
    }

    /// Get the base URL of the master
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn wait_time(&self) -> Duration {
        self.wait_time
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run a call to completion or fail once the wait time elapses
    async fn bounded<T>(&self, call: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.wait_time, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Request timed out after {:?}", self.wait_time);
                Err(ClientError::Timeout(self.wait_time))
            }
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Check the status code and return the body undecoded
    async fn handle_raw_response(&self, response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        let body = response.text().await?;
        Ok(RawResponse::new(status.as_u16(), body))
    }

    async fn api_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        warn!("Master returned {}: {}", status, error_text);
        ClientError::api_error(status.as_u16(), error_text)
    }
}

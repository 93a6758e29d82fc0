//! Blocking client
//!
//! Wraps [`MasterClient`] for synchronous callers. The runtime is supplied
//! by the caller and shared; this client never starts or shuts one down.

use std::future::Future;
use std::time::Duration;

use mesos_probe_core::domain::{ClusterState, Frameworks};
use tokio::runtime::Handle;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::{MasterClient, RawResponse};

/// Synchronous client for the Mesos master
///
/// Each call runs on the supplied runtime and blocks the calling thread
/// until it completes or the wait time elapses.
///
/// The handle must belong to a multi-thread runtime, since its workers drive
/// the I/O and timers while the caller is blocked. Calling any method from
/// inside an async task panics.
///
/// # Example
/// ```no_run
/// use mesos_probe_client::ClusterStateClient;
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let client = ClusterStateClient::new(runtime.handle().clone(), "http://localhost:5050");
///
/// let state = client.fetch_state().unwrap();
/// assert!(state.frameworks.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ClusterStateClient {
    inner: MasterClient,
    handle: Handle,
}

impl ClusterStateClient {
    /// Create a blocking client with the default wait time
    pub fn new(handle: Handle, base_url: impl Into<String>) -> Self {
        Self::with_master(handle, MasterClient::new(base_url))
    }

    /// Create a blocking client from configuration
    pub fn from_config(handle: Handle, config: &ClientConfig) -> Self {
        Self::with_master(handle, MasterClient::from_config(config))
    }

    /// Wrap an existing async client
    pub fn with_master(handle: Handle, inner: MasterClient) -> Self {
        Self { inner, handle }
    }

    /// Override the wait time
    pub fn with_wait_time(self, wait_time: Duration) -> Self {
        Self {
            inner: self.inner.with_wait_time(wait_time),
            handle: self.handle,
        }
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub fn wait_time(&self) -> Duration {
        self.inner.wait_time()
    }

    /// The async client this one delegates to
    pub fn master(&self) -> &MasterClient {
        &self.inner
    }

    fn block_on<T>(&self, call: impl Future<Output = Result<T>>) -> Result<T> {
        self.handle.block_on(call)
    }

    /// See [`MasterClient::fetch_state`]
    pub fn fetch_state(&self) -> Result<ClusterState> {
        self.block_on(self.inner.fetch_state())
    }

    /// See [`MasterClient::fetch_frameworks`]
    pub fn fetch_frameworks(&self) -> Result<Frameworks> {
        self.block_on(self.inner.fetch_frameworks())
    }

    pub fn framework_ids(&self) -> Result<Vec<String>> {
        self.block_on(self.inner.framework_ids())
    }

    pub fn completed_framework_ids(&self) -> Result<Vec<String>> {
        self.block_on(self.inner.completed_framework_ids())
    }

    /// See [`MasterClient::teardown`]
    pub fn teardown(&self, framework_id: &str) -> Result<RawResponse> {
        self.block_on(self.inner.teardown(framework_id))
    }

    pub fn mark_agent_gone(&self, agent_id: &str) -> Result<RawResponse> {
        self.block_on(self.inner.mark_agent_gone(agent_id))
    }

    /// See [`MasterClient::drain_agent`]
    pub fn drain_agent(
        &self,
        agent_id: &str,
        max_grace_period: Option<i64>,
        mark_as_gone: bool,
    ) -> Result<RawResponse> {
        self.block_on(
            self.inner
                .drain_agent(agent_id, max_grace_period, mark_as_gone),
        )
    }

    pub fn reactivate_agent(&self, agent_id: &str) -> Result<RawResponse> {
        self.block_on(self.inner.reactivate_agent(agent_id))
    }
}

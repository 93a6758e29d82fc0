//! Client configuration
//!
//! Where the master lives and how long a single call may take.

use std::time::Duration;

/// Default upper bound on a single call
pub const DEFAULT_WAIT_TIME: Duration = Duration::from_secs(30);

/// Master client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Master base URL (e.g., "http://localhost:5050")
    pub master_url: String,

    /// Maximum time a call may take before failing with a timeout
    pub wait_time: Duration,
}

impl ClientConfig {
    /// Creates a new configuration with the default wait time
    pub fn new(master_url: impl Into<String>) -> Self {
        Self {
            master_url: master_url.into(),
            wait_time: DEFAULT_WAIT_TIME,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - MESOS_MASTER_URL (required)
    /// - MESOS_WAIT_TIME (optional, seconds, default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let master_url = std::env::var("MESOS_MASTER_URL")
            .map_err(|_| anyhow::anyhow!("MESOS_MASTER_URL environment variable not set"))?;

        let wait_time = std::env::var("MESOS_WAIT_TIME")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_WAIT_TIME);

        Ok(Self {
            master_url,
            wait_time,
        })
    }

    /// Overrides the wait time
    pub fn with_wait_time(mut self, wait_time: Duration) -> Self {
        self.wait_time = wait_time;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.master_url.is_empty() {
            anyhow::bail!("master_url cannot be empty");
        }

        if !self.master_url.starts_with("http://") && !self.master_url.starts_with("https://") {
            anyhow::bail!("master_url must start with http:// or https://");
        }

        if self.wait_time.is_zero() {
            anyhow::bail!("wait_time must be greater than 0");
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5050")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.wait_time, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();

        config.master_url = String::new();
        assert!(config.validate().is_err());

        config.master_url = "localhost:5050".to_string();
        assert!(config.validate().is_err());

        config.master_url = "https://master.mesos:5050".to_string();
        assert!(config.validate().is_ok());

        let config = config.with_wait_time(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env() {
        // SAFETY: no other test in this crate reads or writes these variables
        unsafe {
            std::env::set_var("MESOS_MASTER_URL", "http://leader.mesos:5050");
            std::env::set_var("MESOS_WAIT_TIME", "7");
        }
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.master_url, "http://leader.mesos:5050");
        assert_eq!(config.wait_time, Duration::from_secs(7));

        unsafe {
            std::env::set_var("MESOS_WAIT_TIME", "soon");
        }
        assert_eq!(ClientConfig::from_env().unwrap().wait_time, DEFAULT_WAIT_TIME);

        unsafe {
            std::env::remove_var("MESOS_MASTER_URL");
            std::env::remove_var("MESOS_WAIT_TIME");
        }
        assert!(ClientConfig::from_env().is_err());
    }
}

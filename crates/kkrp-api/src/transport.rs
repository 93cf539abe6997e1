// Shared transport configuration for building reqwest::Client instances.
//
// The KKRP01A speaks plain HTTP on the local network, so there is no TLS
// or cookie handling here -- only the request timeout, which is the single
// bound on call duration (the protocol has no retry or cancellation).

use std::time::Duration;

/// Transport configuration for the device HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("kkrp/0.1.0")
            .build()?;
        Ok(client)
    }
}

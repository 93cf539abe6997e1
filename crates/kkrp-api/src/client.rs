// Device HTTP client
//
// Wraps `reqwest::Client` with the KKRP01A's two wire operations: fetch the
// full status snapshot and push a command payload. Stateless per call; the
// controller in `kkrp-core` owns all remembered state and retry policy
// (currently: none -- each call is a single best-effort attempt).

use tracing::debug;
use url::Url;

use crate::command::CommandPayload;
use crate::error::Error;
use crate::status::StatusSnapshot;
use crate::transport::TransportConfig;

/// Raw HTTP client for a single KKRP01A unit.
pub struct DeviceClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DeviceClient {
    /// Resource path of the status feed.
    const STATUS_PATH: &'static str = "param.csv";

    /// Create a client for the device at `host` (bare IP or hostname).
    pub fn new(host: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("http://{host}/"))?;
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client` and base URL.
    ///
    /// Used by tests to point at a mock server.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch and parse one full status snapshot.
    ///
    /// `GET http://<device>/param.csv`, bounded by the configured timeout.
    pub async fn fetch_snapshot(&self) -> Result<StatusSnapshot, Error> {
        let url = self.base_url.join(Self::STATUS_PATH)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        StatusSnapshot::parse(&body)
    }

    /// Push a full command payload to the device.
    ///
    /// `POST http://<device>/` with a form-encoded body. Fire-and-forget:
    /// the firmware returns no interpretable body, so "accepted" vs
    /// "silently ignored" only shows up in the next snapshot.
    pub async fn send_command(&self, payload: &CommandPayload) -> Result<(), Error> {
        debug!("POST {} {payload:?}", self.base_url);

        let resp = self
            .http
            .post(self.base_url.clone())
            .form(payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

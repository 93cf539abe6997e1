// ── Core error types ──
//
// User-facing errors from kkrp-core. Consumers never see raw reqwest
// failures or HTTP status codes; the `From<kkrp_api::Error>` impl
// translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Device communication ─────────────────────────────────────────
    #[error("Cannot reach unit: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Unit did not respond in time")]
    Timeout,

    #[error("Unit rejected the request: {message}")]
    DeviceError { message: String },

    #[error("Malformed status feed: {reason}")]
    MalformedFeed { reason: String },

    // ── State & translation ──────────────────────────────────────────
    #[error("Unknown {axis} token from unit: {token:?}")]
    UnknownMode { axis: &'static str, token: String },

    #[error("Target temperature {requested} out of range ({min}-{max})")]
    InvalidTemperature { requested: i32, min: i32, max: i32 },

    #[error("Unit state not yet known; poll the unit first")]
    NotHydrated,

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn unknown_mode(axis: &'static str, token: &str) -> Self {
        Self::UnknownMode {
            axis,
            token: token.to_owned(),
        }
    }
}

impl From<kkrp_api::Error> for CoreError {
    fn from(err: kkrp_api::Error) -> Self {
        match err {
            kkrp_api::Error::Transport(e) if e.is_timeout() => Self::Timeout,
            kkrp_api::Error::Transport(e) if e.is_connect() => Self::ConnectionFailed {
                reason: e.to_string(),
            },
            kkrp_api::Error::Transport(e) => Self::DeviceError {
                message: e.to_string(),
            },
            kkrp_api::Error::Status { status } => Self::DeviceError {
                message: format!("HTTP status {status}"),
            },
            kkrp_api::Error::InvalidUrl(e) => Self::Config {
                message: e.to_string(),
            },
            kkrp_api::Error::Snapshot { reason } => Self::MalformedFeed { reason },
        }
    }
}

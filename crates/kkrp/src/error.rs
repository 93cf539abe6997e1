//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use kkrp_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the unit at {host}")]
    #[diagnostic(
        code(kkrp::connection_failed),
        help(
            "Check that the adapter is powered and on the local network.\n\
             Host: {host}\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { host: String, reason: String },

    #[error("The unit at {host} did not respond in time")]
    #[diagnostic(
        code(kkrp::timeout),
        help("The adapter can take a few seconds under load. Try --timeout 30.")
    )]
    Timeout { host: String },

    // ── Device ───────────────────────────────────────────────────────

    #[error("The unit rejected the request: {message}")]
    #[diagnostic(code(kkrp::device_error))]
    DeviceError { message: String },

    #[error("Could not understand the unit's status feed: {reason}")]
    #[diagnostic(
        code(kkrp::malformed_feed),
        help(
            "The adapter may be mid-boot or running unexpected firmware.\n\
             Fetch http://<host>/param.csv yourself to inspect the raw feed."
        )
    )]
    MalformedFeed { reason: String },

    #[error("The unit reported an unknown {axis} token: {token:?}")]
    #[diagnostic(
        code(kkrp::unknown_mode),
        help("Run: kkrp modes to see the vocabulary this tool understands.")
    )]
    UnknownMode { axis: &'static str, token: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(kkrp::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Device '{name}' not found in configuration")]
    #[diagnostic(
        code(kkrp::device_not_found),
        help("Run: kkrp config show to see configured devices.")
    )]
    DeviceNotFound { name: String },

    #[error("No device selected")]
    #[diagnostic(
        code(kkrp::no_device),
        help(
            "Pass --host <ip>, or --device <profile>, or set default_device\n\
             in the config file. Run: kkrp config init to create one."
        )
    )]
    NoDevice,

    #[error("Configuration error: {message}")]
    #[diagnostic(code(kkrp::config))]
    Config { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(kkrp::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Exit code for the process.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NoDevice => exit_code::USAGE,
            Self::DeviceNotFound { .. } => exit_code::NOT_FOUND,
            Self::DeviceError { .. }
            | Self::MalformedFeed { .. }
            | Self::UnknownMode { .. }
            | Self::Config { .. }
            | Self::Io(_) => exit_code::GENERAL,
        }
    }

    /// Translate a core error, attaching the unit's host for context.
    pub fn from_core(err: CoreError, host: &str) -> Self {
        match err {
            CoreError::ConnectionFailed { reason } => Self::ConnectionFailed {
                host: host.to_owned(),
                reason,
            },
            CoreError::Timeout => Self::Timeout {
                host: host.to_owned(),
            },
            CoreError::DeviceError { message } => Self::DeviceError { message },
            CoreError::MalformedFeed { reason } => Self::MalformedFeed { reason },
            CoreError::UnknownMode { axis, token } => Self::UnknownMode { axis, token },
            CoreError::InvalidTemperature {
                requested,
                min,
                max,
            } => Self::Validation {
                field: "temperature".into(),
                reason: format!("{requested} is outside {min}-{max}"),
            },
            CoreError::NotHydrated => Self::DeviceError {
                message: "unit state not yet known".into(),
            },
            CoreError::Config { message } => Self::Config { message },
        }
    }
}

impl From<kkrp_config::ConfigError> for CliError {
    fn from(err: kkrp_config::ConfigError) -> Self {
        match err {
            kkrp_config::ConfigError::Validation { field, reason } => {
                Self::Validation { field, reason }
            }
            kkrp_config::ConfigError::UnknownDevice { name } => Self::DeviceNotFound { name },
            kkrp_config::ConfigError::NoDevices | kkrp_config::ConfigError::AmbiguousDevice => {
                Self::NoDevice
            }
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}

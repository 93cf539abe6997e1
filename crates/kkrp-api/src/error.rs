use thiserror::Error;

/// Top-level error type for the `kkrp-api` crate.
///
/// Covers every failure mode of the two wire operations: HTTP transport,
/// non-success responses, and status-feed parsing. `kkrp-core` maps these
/// into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (timeout, connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The device answered with a non-success HTTP status.
    #[error("Device returned HTTP {status}")]
    Status { status: u16 },

    /// URL parsing error (bad host in config).
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// The status feed could not be parsed into the positional schema.
    ///
    /// Wrong field count, an unparsable numeric field, or a malformed
    /// prior-values bundle all land here. Treated as a transport-level
    /// failure by callers: the snapshot is unusable, the poll failed.
    #[error("Malformed status feed: {reason}")]
    Snapshot { reason: String },
}

impl Error {
    /// Returns `true` if this is a transient network error -- the next
    /// poll cycle may well succeed without intervention.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status } => *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn snapshot(reason: impl Into<String>) -> Self {
        Self::Snapshot {
            reason: reason.into(),
        }
    }
}

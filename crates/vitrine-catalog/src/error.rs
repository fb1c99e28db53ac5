use thiserror::Error;

/// Failures a store gateway can hit while talking to one backing store.
///
/// These never cross the orchestrator boundary: the gateway catches them,
/// logs a diagnostic, and degrades to an empty result.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("unexpected response shape from {url}: {reason}")]
    UnexpectedShape { url: String, reason: String },
}

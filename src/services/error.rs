//! # Fetch Error Taxonomy
//!
//! Typed failures raised by the network layer. The view model is the sole
//! consumer; it routes everything through the error translator before
//! anything reaches a user. Cancellation is deliberately not represented
//! here: a cancelled fetch is aborted and never resolves, so it can never
//! surface as an error.

use thiserror::Error;

/// Transport-layer failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The connection could not be established
    NoConnectivity,
    /// The request timed out in flight
    TimedOut,
    /// Any other transport failure
    Other,
}

/// Failure raised by a population fetch
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The URL template or the substituted address is malformed
    #[error("Invalid URL.")]
    InvalidUrl,

    /// The server answered with a status outside 200-299
    #[error("Invalid response from the server.")]
    InvalidResponse { status: u16 },

    /// The server answered successfully but delivered nothing
    #[error("No data received.")]
    NoData,

    /// The body could not be decoded into the expected shape
    #[error("Failed to decode the data.")]
    Decoding,

    /// The request failed at the transport layer
    #[error("The request could not be completed.")]
    Transport(TransportKind),
}

impl FetchError {
    /// Classify a reqwest error into the transport taxonomy
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Transport(TransportKind::TimedOut)
        } else if err.is_connect() {
            FetchError::Transport(TransportKind::NoConnectivity)
        } else {
            FetchError::Transport(TransportKind::Other)
        }
    }
}

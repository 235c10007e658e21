//! # Error Translation
//!
//! Maps typed fetch failures to the fixed, human-readable messages the
//! presentation layer shows. Total: every error produces a message.

use crate::services::error::{FetchError, TransportKind};

/// Seam for turning a fetch failure into a user-facing message
pub trait ErrorTranslator: Send + Sync {
    fn translate(&self, error: &FetchError) -> String;
}

/// Production message mapping
pub struct DefaultErrorTranslator;

impl ErrorTranslator for DefaultErrorTranslator {
    fn translate(&self, error: &FetchError) -> String {
        match error {
            FetchError::Transport(kind) => translate_transport(*kind).to_string(),
            FetchError::Decoding => "An error occurred while processing data.".to_string(),
            // Domain failures carry their own fixed descriptions
            other => other.to_string(),
        }
    }
}

fn translate_transport(kind: TransportKind) -> &'static str {
    match kind {
        TransportKind::NoConnectivity => {
            "No internet connection. Please check your network settings."
        }
        TransportKind::TimedOut => "The request timed out. Please try again.",
        TransportKind::Other => "Unable to fetch data. Please check your internet connection.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_and_timeout_get_distinct_messages() {
        let translator = DefaultErrorTranslator;

        assert_eq!(
            translator.translate(&FetchError::Transport(TransportKind::NoConnectivity)),
            "No internet connection. Please check your network settings."
        );
        assert_eq!(
            translator.translate(&FetchError::Transport(TransportKind::TimedOut)),
            "The request timed out. Please try again."
        );
    }

    #[test]
    fn other_transport_failures_get_generic_fallback() {
        let translator = DefaultErrorTranslator;
        assert_eq!(
            translator.translate(&FetchError::Transport(TransportKind::Other)),
            "Unable to fetch data. Please check your internet connection."
        );
    }

    #[test]
    fn decoding_failures_surface_no_structural_detail() {
        let translator = DefaultErrorTranslator;
        assert_eq!(
            translator.translate(&FetchError::Decoding),
            "An error occurred while processing data."
        );
    }

    #[test]
    fn server_response_failure_uses_domain_description_not_fallback() {
        let translator = DefaultErrorTranslator;
        assert_eq!(
            translator.translate(&FetchError::InvalidResponse { status: 404 }),
            "Invalid response from the server."
        );
    }

    #[test]
    fn remaining_domain_kinds_use_their_descriptions() {
        let translator = DefaultErrorTranslator;
        assert_eq!(translator.translate(&FetchError::InvalidUrl), "Invalid URL.");
        assert_eq!(translator.translate(&FetchError::NoData), "No data received.");
    }
}

//! # Services
//!
//! Network access, the typed failure taxonomy, and the translation of
//! failures into user-facing messages.

pub mod error;
pub mod network;
pub mod translator;

pub use error::{FetchError, TransportKind};
pub use network::{NetworkService, PopulationProvider};
pub use translator::{DefaultErrorTranslator, ErrorTranslator};

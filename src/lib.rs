//! # Popline - Population Statistics Client
//!
//! Retrieves population statistics (by U.S. state or by nation) from a remote
//! JSON API and lets callers filter the results by year and free-text search.
//! Built with clean MVVM architecture for maintainability and testability.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   commands    ┌──────────────────────┐   fetches   ┌────────────────┐
//! │ Presentation │──────────────▶│ PopulationViewModel  │────────────▶│ NetworkService │
//! │ (external)   │◀──────────────│  - fetch lifecycle   │◀────────────│  (reqwest)     │
//! └──────────────┘ state events  │  - year narrowing    │  outcomes   └────────────────┘
//!                                │  - debounced search  │
//!                                └──────────┬───────────┘
//!                                           │ selects
//!                                           ▼
//!                                ┌──────────────────────┐
//!                                │ DataFilter           │
//!                                │  StateFilter /       │
//!                                │  NationFilter        │
//!                                └──────────────────────┘
//! ```
//!
//! The view model owns one in-flight fetch at a time; starting a new fetch
//! cancels the previous one, and a cancelled fetch can never mutate state.
//! Search edits are coalesced over a 700 ms quiescence window before the
//! refilter runs; year and category changes apply immediately.

pub mod cmd_args;
pub mod config;
pub mod filters;
pub mod format;
pub mod models;
pub mod services;
pub mod view_models;

// Re-export main types for easy access
pub use filters::{create_filter, DataFilter, NationFilter, StateFilter};
pub use models::{Category, PopulationData, PopulationRecord};
pub use services::{
    DefaultErrorTranslator, ErrorTranslator, FetchError, NetworkService, PopulationProvider,
    TransportKind,
};
pub use view_models::{
    DetailsViewModel, PopulationViewModel, RenderState, StateEvent, NO_DATA_MESSAGE,
};

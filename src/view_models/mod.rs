//! # View Models
//!
//! The orchestration layer between the services and the presentation:
//! observable state, fetch lifecycle, debounced filtering, and per-record
//! detail values. Presentation code only reads observable state and calls
//! the public commands; it never computes filtering itself.

pub mod debounce;
pub mod details;
pub mod events;
pub mod population;

pub use debounce::SearchDebouncer;
pub use details::DetailsViewModel;
pub use events::{StateEvent, StateEventBus, StateEventHandler};
pub use population::{PopulationViewModel, RenderState, NO_DATA_MESSAGE};

//! # Search Filters
//!
//! Client-side search narrowing over an in-memory snapshot. Each category has
//! its own filter strategy keyed to the name field it displays; the factory
//! picks the right one.
//!
//! Filter contract:
//! - empty search text is the identity transform, name-absent records
//!   included
//! - non-empty search keeps records whose relevant name field is present and
//!   contains the text as a case-insensitive substring
//! - relative input order is preserved; no whitespace trimming happens here

pub mod nation;
pub mod state;

pub use nation::NationFilter;
pub use state::StateFilter;

use crate::models::{Category, PopulationRecord};

/// Search filter for one category's name field
pub trait DataFilter: Send + Sync {
    /// Return the subset of `records` matching `search_text`
    fn filter(&self, records: &[PopulationRecord], search_text: &str) -> Vec<PopulationRecord>;
}

/// Create the filter implementation for a category.
///
/// Filters are stateless; a fresh boxed instance per call is cheap and keeps
/// callers from sharing anything.
pub fn create_filter(category: Category) -> Box<dyn DataFilter> {
    match category {
        Category::State => Box::new(StateFilter),
        Category::Nation => Box::new(NationFilter),
    }
}

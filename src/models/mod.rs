//! # Data Models
//!
//! Wire-format records and the category selector shared by every layer.

pub mod category;
pub mod population;

pub use category::Category;
pub use population::{PopulationData, PopulationRecord};

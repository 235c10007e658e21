//! # Details View Model
//!
//! Presentation values for a single selected record. Absent upstream fields
//! render as explicit "Unknown" placeholders rather than failing.

use crate::format;
use crate::models::{Category, PopulationRecord};

/// Ready-to-render detail fields for one population record
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsViewModel {
    /// Display subject: state or nation name per the category
    pub title: String,
    /// Identifier matching the category
    pub id: String,
    pub year: String,
    /// Population with thousands separators
    pub population: String,
    /// Extra (label, value) rows for whichever name fields are present
    pub additional_info: Vec<(String, String)>,
}

impl DetailsViewModel {
    pub fn new(record: &PopulationRecord, category: Category) -> Self {
        let title = record
            .display_name(category)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unknown {category}"));
        let id = record
            .display_id(category)
            .map(str::to_string)
            .unwrap_or_else(|| "Unknown ID".to_string());

        let year = record.year.clone().unwrap_or_else(|| "Unknown Year".to_string());
        let population = record
            .population
            .map(format::with_separator)
            .unwrap_or_else(|| "Unknown Population".to_string());

        let mut additional_info = Vec::new();
        if let Some(nation) = &record.nation {
            additional_info.push(("Nation".to_string(), nation.clone()));
        }
        if let Some(state) = &record.state {
            additional_info.push(("State".to_string(), state.clone()));
        }

        Self {
            title,
            id,
            year,
            population,
            additional_info,
        }
    }
}

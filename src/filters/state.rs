//! State-level search filter.

use crate::filters::DataFilter;
use crate::models::PopulationRecord;

/// Matches records whose state name contains the search text
pub struct StateFilter;

impl DataFilter for StateFilter {
    fn filter(&self, records: &[PopulationRecord], search_text: &str) -> Vec<PopulationRecord> {
        if search_text.is_empty() {
            return records.to_vec();
        }
        let needle = search_text.to_lowercase();
        records
            .iter()
            .filter(|record| {
                record
                    .state
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

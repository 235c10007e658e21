//! Nation-level search filter.

use crate::filters::DataFilter;
use crate::models::PopulationRecord;

/// Matches records whose nation name contains the search text
pub struct NationFilter;

impl DataFilter for NationFilter {
    fn filter(&self, records: &[PopulationRecord], search_text: &str) -> Vec<PopulationRecord> {
        if search_text.is_empty() {
            return records.to_vec();
        }
        let needle = search_text.to_lowercase();
        records
            .iter()
            .filter(|record| {
                record
                    .nation
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nation_record(name: Option<&str>) -> PopulationRecord {
        PopulationRecord {
            nation: name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn empty_search_keeps_records_without_nation_name() {
        let records = vec![nation_record(None), nation_record(Some("United States"))];

        let result = NationFilter.filter(&records, "");
        assert_eq!(result, records);
    }

    #[test]
    fn search_matches_nation_field_only() {
        let mut record = nation_record(Some("United States"));
        record.state = Some("Utah".to_string());
        let records = vec![record];

        // "utah" appears in the state field, not the nation field
        assert!(NationFilter.filter(&records, "utah").is_empty());
        assert_eq!(NationFilter.filter(&records, "united").len(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = vec![nation_record(Some("United States"))];
        assert_eq!(NationFilter.filter(&records, "STATES").len(), 1);
    }
}

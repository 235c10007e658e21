//! # Population Records
//!
//! Wire-format models for the population endpoint. The API returns a single
//! JSON object whose `data` field holds an array of observations; every field
//! of an observation may be absent upstream, so all of them decode as
//! options. Missing fields render as explicit "Unknown" placeholders further
//! up the stack rather than failing the decode.

use serde::Deserialize;
use uuid::Uuid;

use crate::models::Category;

fn new_record_id() -> Uuid {
    Uuid::new_v4()
}

/// One population observation as returned by the remote API.
///
/// Records are immutable value objects. Each gets a locally generated unique
/// id at decode time (not derived from content); equality is the id plus the
/// structural fields, which is what list diffing keys on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PopulationRecord {
    /// Locally assigned identity, never present on the wire
    #[serde(skip, default = "new_record_id")]
    pub id: Uuid,

    #[serde(rename = "ID Nation", default)]
    pub nation_id: Option<String>,

    #[serde(rename = "ID State", default)]
    pub state_id: Option<String>,

    #[serde(rename = "Nation", default)]
    pub nation: Option<String>,

    #[serde(rename = "State", default)]
    pub state: Option<String>,

    /// Four-digit year as text, e.g. "2022"
    #[serde(rename = "Year", default)]
    pub year: Option<String>,

    #[serde(rename = "Population", default)]
    pub population: Option<u64>,
}

impl Default for PopulationRecord {
    fn default() -> Self {
        Self {
            id: new_record_id(),
            nation_id: None,
            state_id: None,
            nation: None,
            state: None,
            year: None,
            population: None,
        }
    }
}

impl PopulationRecord {
    /// Name field that the given category displays and filters on
    pub fn display_name(&self, category: Category) -> Option<&str> {
        match category {
            Category::Nation => self.nation.as_deref(),
            Category::State => self.state.as_deref(),
        }
    }

    /// Identifier field matching the given category
    pub fn display_id(&self, category: Category) -> Option<&str> {
        match category {
            Category::Nation => self.nation_id.as_deref(),
            Category::State => self.state_id.as_deref(),
        }
    }
}

/// Envelope object wrapping the record array on the wire
#[derive(Debug, Deserialize)]
pub struct PopulationData {
    #[serde(default)]
    pub data: Option<Vec<PopulationRecord>>,
}

impl PopulationData {
    /// Unwrap the payload; a missing or null `data` field is an empty
    /// collection, not an error.
    pub fn into_records(self) -> Vec<PopulationRecord> {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_wire_field_names() {
        let json = r#"{
            "ID Nation": "01000US",
            "Nation": "United States",
            "Year": "2022",
            "Population": 331097593
        }"#;

        let record: PopulationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.nation_id.as_deref(), Some("01000US"));
        assert_eq!(record.nation.as_deref(), Some("United States"));
        assert_eq!(record.state, None);
        assert_eq!(record.state_id, None);
        assert_eq!(record.year.as_deref(), Some("2022"));
        assert_eq!(record.population, Some(331097593));
    }

    #[test]
    fn record_tolerates_all_fields_missing() {
        let record: PopulationRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.nation, None);
        assert_eq!(record.state, None);
        assert_eq!(record.year, None);
        assert_eq!(record.population, None);
    }

    #[test]
    fn decoded_records_get_distinct_ids() {
        let a: PopulationRecord = serde_json::from_str("{}").unwrap();
        let b: PopulationRecord = serde_json::from_str("{}").unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn envelope_with_missing_data_field_is_empty() {
        let empty: PopulationData = serde_json::from_str("{}").unwrap();
        assert!(empty.into_records().is_empty());

        let null: PopulationData = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(null.into_records().is_empty());
    }

    #[test]
    fn envelope_unwraps_record_array() {
        let json = r#"{"data": [{"State": "Vermont", "Year": "2020", "Population": 623347}]}"#;
        let envelope: PopulationData = serde_json::from_str(json).unwrap();
        let records = envelope.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state.as_deref(), Some("Vermont"));
    }

    #[test]
    fn display_name_follows_category() {
        let record = PopulationRecord {
            nation: Some("United States".to_string()),
            state: Some("Ohio".to_string()),
            ..Default::default()
        };
        assert_eq!(record.display_name(Category::Nation), Some("United States"));
        assert_eq!(record.display_name(Category::State), Some("Ohio"));
    }
}

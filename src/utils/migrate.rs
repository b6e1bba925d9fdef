//! One-time migration from the keyed-map file format
//!
//! Converts a flat `{key: {fields...}}` JSON file into the array form the
//! REST store serves: `{"locations": [{"id": key, ...fields}, ...]}`. Run
//! once, out of the application lifecycle.

use std::path::Path;

use serde_json::{Map, Value, json};

use crate::error::Result;

/// Convert `input` into the `{"locations": [...]}` form and write it to
/// `output`, pretty-printed. Returns the number of records converted.
///
/// Entries whose value is not a JSON object are skipped with a warning.
pub fn migrate_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize> {
    let raw = std::fs::read_to_string(input.as_ref())?;
    let map: Map<String, Value> = serde_json::from_str(&raw)?;

    let mut locations = Vec::with_capacity(map.len());
    for (key, value) in map {
        let Value::Object(fields) = value else {
            tracing::warn!(key, "Skipping non-object entry");
            continue;
        };
        let mut record = Map::with_capacity(fields.len() + 1);
        record.insert("id".to_string(), Value::String(key));
        record.extend(fields);
        locations.push(Value::Object(record));
    }

    let count = locations.len();
    let doc = json!({ "locations": locations });
    std::fs::write(output.as_ref(), serde_json::to_string_pretty(&doc)?)?;

    tracing::info!(
        count,
        output = %output.as_ref().display(),
        "Migration complete"
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_map_becomes_location_array() {
        let dir = std::env::temp_dir();
        let input = dir.join("locadmin_migrate_in.json");
        let output = dir.join("locadmin_migrate_out.json");

        std::fs::write(
            &input,
            r#"{
                "NOSAD": {"name": "Banff", "city": "Banff", "country": "Canada", "province": "Alberta"},
                "NOSAU": {"name": "Aspen", "city": "Aspen", "country": "USA", "province": "Colorado"}
            }"#,
        )
        .expect("write input");

        let count = migrate_file(&input, &output).expect("migrate");
        assert_eq!(count, 2);

        let raw = std::fs::read_to_string(&output).expect("read output");
        let doc: Value = serde_json::from_str(&raw).expect("parse output");
        let locations = doc["locations"].as_array().expect("locations array");
        assert_eq!(locations.len(), 2);
        assert!(
            locations
                .iter()
                .any(|l| l["id"] == "NOSAD" && l["name"] == "Banff")
        );

        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let dir = std::env::temp_dir();
        let input = dir.join("locadmin_migrate_skip_in.json");
        let output = dir.join("locadmin_migrate_skip_out.json");

        std::fs::write(&input, r#"{"good": {"name": "Banff"}, "bad": 42}"#).expect("write");

        let count = migrate_file(&input, &output).expect("migrate");
        assert_eq!(count, 1);

        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let result = migrate_file("/nonexistent/db.json", "/tmp/out.json");
        assert!(result.is_err());
    }
}

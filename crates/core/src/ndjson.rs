//! NDJSON result parsing

use serde_json::Value as JsonValue;

use crate::error::BridgeError;

/// Extract the `id` field of every record in an NDJSON body.
///
/// Each non-blank line is parsed as an independent JSON object; ids come back
/// in the order the lines appear. A line that is not valid JSON, or whose
/// record has no string `id`, fails the whole extraction.
pub fn parse_patient_ids(body: &str) -> Result<Vec<String>, BridgeError> {
    let mut ids = Vec::new();
    for (idx, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: JsonValue = serde_json::from_str(line).map_err(|source| {
            BridgeError::NdjsonLine {
                line: idx + 1,
                source,
            }
        })?;
        let id = record
            .get("id")
            .and_then(JsonValue::as_str)
            .ok_or(BridgeError::NdjsonMissingId { line: idx + 1 })?;
        ids.push(id.to_owned());
    }
    Ok(ids)
}

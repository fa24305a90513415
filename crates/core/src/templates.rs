//! Resource document loading

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::error::BridgeError;

/// Read and parse a JSON document from disk.
///
/// One-shot synchronous read, no caching: callers load a fresh copy per
/// request so a mutated template is never shared across requests.
pub fn load(path: &Path) -> Result<JsonValue, BridgeError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            tracing::error!(path = %path.display(), "resource document not found");
            BridgeError::TemplateNotFound(path.to_path_buf())
        } else {
            tracing::error!(path = %path.display(), error = %e, "failed to read resource document");
            BridgeError::TemplateRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let document: JsonValue = serde_json::from_str(&raw).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "invalid JSON in resource document");
        BridgeError::TemplateParse {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    // A document that parses to bare `null` carries nothing to fill in.
    if document.is_null() {
        tracing::error!(path = %path.display(), "resource document holds no data");
        return Err(BridgeError::TemplateEmpty(path.to_path_buf()));
    }

    Ok(document)
}

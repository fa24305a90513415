//! Extraction request assembly
//!
//! Merges a validated cohort definition into the CRTDL query template,
//! encodes the result, and wraps it in the FHIR `Parameters` envelope torch
//! expects at `$extract-data`.

use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value as JsonValue;

use crate::error::BridgeError;
use crate::templates;

const SCHEMA_FILE: &str = "jsonschema.json";
const QUERY_FILE: &str = "torchQuery.json";
const ENVELOPE_FILE: &str = "torchRequestBody.json";

const GROUP_REFERENCE_POINTER: &str = "/dataExtraction/attributeGroups/0/groupReference";
const ENVELOPE_VALUE_POINTER: &str = "/parameter/0/valueBase64Binary";

/// Assembles torch extraction envelopes from cohort definitions.
pub struct RequestBuilder {
    resource_dir: PathBuf,
    group_reference: String,
}

impl RequestBuilder {
    pub fn new(resource_dir: impl Into<PathBuf>, group_reference: impl Into<String>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            group_reference: group_reference.into(),
        }
    }

    /// Validate `cohort` against the schema document and assemble the request
    /// envelope around it.
    ///
    /// The cohort definition is placed into the query template verbatim; the
    /// configured group reference overwrites whatever the template carries.
    /// Any template that fails to load or lacks its expected slot is a hard
    /// error.
    pub fn build(&self, cohort: JsonValue) -> Result<JsonValue, BridgeError> {
        self.validate(&cohort)?;

        let mut query = templates::load(&self.resource_dir.join(QUERY_FILE))?;
        let group_slot = query.pointer_mut(GROUP_REFERENCE_POINTER).ok_or(
            BridgeError::TemplateShape {
                document: QUERY_FILE,
                pointer: GROUP_REFERENCE_POINTER,
            },
        )?;
        *group_slot = JsonValue::String(self.group_reference.clone());

        query
            .as_object_mut()
            .ok_or(BridgeError::TemplateShape {
                document: QUERY_FILE,
                pointer: "/cohortDefinition",
            })?
            .insert("cohortDefinition".to_string(), cohort);

        let encoded = to_base64(&query);

        let mut envelope = templates::load(&self.resource_dir.join(ENVELOPE_FILE))?;
        let value_slot = envelope.pointer_mut(ENVELOPE_VALUE_POINTER).ok_or(
            BridgeError::TemplateShape {
                document: ENVELOPE_FILE,
                pointer: ENVELOPE_VALUE_POINTER,
            },
        )?;
        *value_slot = JsonValue::String(encoded);

        Ok(envelope)
    }

    fn validate(&self, cohort: &JsonValue) -> Result<(), BridgeError> {
        let schema = templates::load(&self.resource_dir.join(SCHEMA_FILE))?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| BridgeError::SchemaCompile(e.to_string()))?;
        if let Err(error) = validator.validate(cohort) {
            return Err(BridgeError::Validation(error.to_string()));
        }
        Ok(())
    }
}

/// Serialize a query compactly and encode it as base64 over its UTF-8 bytes.
pub fn to_base64(query: &JsonValue) -> String {
    BASE64.encode(query.to_string())
}

use std::path::PathBuf;

use thiserror::Error;

/// Bridge error types
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("resource document not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("failed to read resource document {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in resource document {}: {source}", .path.display())]
    TemplateParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("resource document {} holds no data", .0.display())]
    TemplateEmpty(PathBuf),

    #[error("cohort definition schema does not compile: {0}")]
    SchemaCompile(String),

    #[error("{0}")]
    Validation(String),

    #[error("resource document {document} is missing element {pointer}")]
    TemplateShape {
        document: &'static str,
        pointer: &'static str,
    },

    #[error("invalid NDJSON on line {line}: {source}")]
    NdjsonLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("NDJSON record on line {line} has no string `id` field")]
    NdjsonMissingId { line: usize },
}

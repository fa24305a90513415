//! bridge-core: cohort extraction request plumbing
//!
//! This crate holds the transport-free half of the torch bridge: loading the
//! JSON resource documents, assembling and encoding extraction requests,
//! rehosting result-file URLs, and pulling patient identifiers out of NDJSON
//! bodies. The HTTP client and server live in `bridge-server`.

pub mod error;
pub mod ndjson;
pub mod query;
pub mod rehost;
pub mod templates;

pub use error::BridgeError;
pub use query::RequestBuilder;
pub use rehost::OutputEntry;

//! Result-file URL rehosting

use serde::Deserialize;

/// One entry of the `output` array in a torch status response.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputEntry {
    pub url: String,
}

/// Rewrite result-file URLs from the torch-internal base URL to the
/// externally reachable proxy base URL.
///
/// Order is preserved. A URL that does not contain the internal base is
/// passed through unchanged.
pub fn rehost_urls(entries: &[OutputEntry], internal_base: &str, proxy_base: &str) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.url.replace(internal_base, proxy_base))
        .collect()
}

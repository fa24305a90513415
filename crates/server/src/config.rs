//! Server configuration

use std::path::PathBuf;

use thiserror::Error;

/// Basic-auth credentials forwarded to torch and the result-file proxy.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Server configuration, constructed once at process start.
///
/// Every required value missing from the environment is a construction-time
/// error; request handling never consults the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub torch_base_url: String,
    pub proxy_base_url: String,
    pub group_reference: String,
    pub resource_dir: PathBuf,
    pub basic_auth: Option<BasicAuth>,
    pub tls_verify: bool,
    pub cors_origins: Vec<String>,
}

/// Configuration construction errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let torch_base_url = require("TORCH_BASE_URL")?;
        let proxy_base_url = require("TORCH_NGINX_SERVER")?;
        let group_reference = require("FDPG_GROUP_REFERENCE")?;

        // The flag itself must be present; only the literal "True" enables auth.
        let basic_auth = if require("TORCH_BASIC_AUTH")? == "True" {
            Some(BasicAuth {
                username: require("TORCH_USERNAME")?,
                password: require("TORCH_PASSWORD")?,
            })
        } else {
            None
        };

        let tls_verify = lookup("TORCH_TLS_VERIFY").is_none_or(|v| v != "false");

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".into()),
            torch_base_url,
            proxy_base_url,
            group_reference,
            resource_dir: lookup("TORCH_RESOURCE_DIR")
                .map_or_else(|| PathBuf::from("resources"), PathBuf::from),
            basic_auth,
            tls_verify,
            cors_origins: lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "*".into())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .collect(),
        })
    }
}

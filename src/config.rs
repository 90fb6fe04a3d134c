//! Configuration types for the proxy
//!
//! Configuration can be loaded from a YAML file and is then overridden by
//! command-line flags. Every field has a default so an empty file (or no
//! file at all) yields a working deployment.

use crate::error::{Error, Result};
use crate::types::{CredentialSource, DEFAULT_BASE_URL, DEFAULT_ENGINE, MAX_PAGES_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete proxy configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Inbound server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Upstream provider settings
    #[serde(default)]
    pub upstream: UpstreamSettings,
}

impl ProxyConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file '{}': {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let upstream = &self.upstream;

        if upstream.max_pages == 0 || upstream.max_pages > MAX_PAGES_LIMIT {
            return Err(Error::config(format!(
                "max_pages must be between 1 and {MAX_PAGES_LIMIT}, got {}",
                upstream.max_pages
            )));
        }

        if upstream.engine.trim().is_empty() {
            return Err(Error::config("engine must not be empty"));
        }

        if upstream.timeout_secs == 0 || upstream.deadline_secs == 0 {
            return Err(Error::config("timeouts must be greater than zero"));
        }

        let url = url::Url::parse(&upstream.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

// ============================================================================
// Server Settings
// ============================================================================

/// Settings for the inbound HTTP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Where callers supply the provider credential
    #[serde(default)]
    pub credential_source: CredentialSource,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            credential_source: CredentialSource::default(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

// ============================================================================
// Upstream Settings
// ============================================================================

/// Settings for the upstream search provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Search endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Engine selector sent as `engine=`
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Hard cap on upstream calls per inbound request
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Timeout for a single upstream call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total time budget for all upstream calls of one inbound request
    #[serde(default = "default_deadline_secs")]
    pub deadline_secs: u64,

    /// User agent sent upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl UpstreamSettings {
    /// Per-call timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Per-request deadline as a Duration
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            engine: default_engine(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout_secs(),
            deadline_secs: default_deadline_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_engine() -> String {
    DEFAULT_ENGINE.to_string()
}

fn default_max_pages() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_deadline_secs() -> u64 {
    120
}

fn default_user_agent() -> String {
    format!("places-proxy/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.credential_source, CredentialSource::Header);
        assert_eq!(config.upstream.base_url, "https://serpapi.com/search.json");
        assert_eq!(config.upstream.engine, "google_maps");
        assert_eq!(config.upstream.max_pages, 10);
        assert_eq!(config.upstream.timeout(), Duration::from_secs(30));
        assert_eq!(config.upstream.deadline(), Duration::from_secs(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ProxyConfig::from_yaml("  \n").unwrap();
        assert_eq!(config, ProxyConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r"
server:
  port: 9090
  credential_source: body
upstream:
  max_pages: 5
";
        let config = ProxyConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.credential_source, CredentialSource::Body);
        assert_eq!(config.upstream.max_pages, 5);
        assert_eq!(config.upstream.engine, "google_maps");
    }

    #[test]
    fn test_rejects_out_of_range_max_pages() {
        let err = ProxyConfig::from_yaml("upstream:\n  max_pages: 0\n").unwrap_err();
        assert!(err.to_string().contains("max_pages"));

        let err = ProxyConfig::from_yaml("upstream:\n  max_pages: 51\n").unwrap_err();
        assert!(err.to_string().contains("max_pages"));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let err = ProxyConfig::from_yaml("upstream:\n  base_url: not a url\n").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ProxyConfig::from_yaml("upstream:\n  base_url: ftp://example.com\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "upstream:\n  engine: google_maps\n  max_pages: 3").unwrap();

        let config = ProxyConfig::load(file.path()).unwrap();
        assert_eq!(config.upstream.max_pages, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProxyConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_yaml_round_trip_is_stable() {
        let config = ProxyConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("max_pages: 10"));
        assert_eq!(ProxyConfig::from_yaml(&yaml).unwrap(), config);
    }
}

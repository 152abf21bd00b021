//! Harness configuration loaded from a JSON file.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Deployment coordinates and credentials for the API under test.
///
/// Loaded once at the start of a test run and passed by reference to
/// whatever needs it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Scheme and host, e.g. `https://api.example.edu`
    pub hostname: String,
    /// API version path segment, e.g. `/v1`
    pub version: String,
    /// Extra path prefix between version and resources, usually empty
    #[serde(default)]
    pub api: String,
    /// OAuth2 token endpoint path, e.g. `/oauth2/token`
    pub token_endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    /// A known location id used by the single-resource tests
    pub single_resource_id: String,
}

impl Config {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Read and parse the configuration file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Resolve the configuration path from `HARNESS_CONFIG`, falling back
    /// to `configuration.json` in the working directory. `.env` is
    /// honored.
    pub fn from_default_location() -> Result<Self> {
        dotenvy::dotenv().ok();
        let path = std::env::var("HARNESS_CONFIG")
            .unwrap_or_else(|_| "configuration.json".to_owned());
        Self::from_file(path)
    }

    /// `hostname + version + api`
    pub fn base_url(&self) -> String {
        format!("{}{}{}", self.hostname, self.version, self.api)
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url(), self.token_endpoint)
    }

    pub fn locations_url(&self) -> String {
        format!("{}/locations", self.base_url())
    }

    pub fn services_url(&self) -> String {
        format!("{}/services", self.base_url())
    }
}

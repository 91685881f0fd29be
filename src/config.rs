use crate::errors::{ConfigError, Result};
use fillout_api::{ApiConfig, Fillout, Region};
use fillout_core::mask_secret;
use serde::Deserialize;
use std::fmt;

/// Client settings supplied by the embedding application.
///
/// Nothing is read from disk or the environment here; the application
/// decides where the TOML (or the values) come from.
///
/// ```toml
/// api_key = "sk_prod_..."
/// region = "eu"
/// ```
#[derive(Clone, Default, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    /// `us`, `eu` or `ca`; anything else selects `us`
    #[serde(default)]
    pub region: Option<String>,
    /// Overrides the region host when set
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region.as_str().to_string());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Parse settings from a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn region(&self) -> Region {
        self.region
            .as_deref()
            .map(Region::from_selector)
            .unwrap_or_default()
    }

    /// Build a client from these settings
    pub fn into_client(self) -> Result<Fillout> {
        Fillout::from_config(&self)
    }
}

impl ApiConfig for ClientConfig {
    type Error = ConfigError;

    fn get_api_key(&self) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingField("api_key".to_string()));
        }
        Ok(self.api_key.clone())
    }

    fn get_region(&self) -> Result<Option<Region>> {
        Ok(Some(self.region()))
    }

    fn get_base_url(&self) -> Result<Option<String>> {
        Ok(self.base_url.clone().filter(|url| !url.is_empty()))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("region", &self.region)
            .field("base_url", &self.base_url)
            .finish()
    }
}

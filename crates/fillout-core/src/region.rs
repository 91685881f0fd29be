use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment region selecting which Fillout host serves requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Eu,
    Ca,
}

impl Region {
    /// Resolve a region selector such as `"eu"`.
    ///
    /// Anything unrecognized (including an empty string) falls back to
    /// [`Region::Us`].
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "eu" => Region::Eu,
            "ca" => Region::Ca,
            _ => Region::Us,
        }
    }

    /// Base URL of the API host for this region
    pub fn base_url(self) -> &'static str {
        match self {
            Region::Us => "https://api.fillout.com",
            Region::Eu => "https://eu-api.fillout.com",
            Region::Ca => "https://ca-api.fillout.com",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::Ca => "ca",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use thiserror::Error;

/// Where a valid API key can be created.
pub const DEVELOPER_SETTINGS_URL: &str = "https://build.fillout.com/home/settings/developer";

/// Core domain errors - no I/O dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid Fillout API key. Visit {} to create one.", DEVELOPER_SETTINGS_URL)]
    InvalidApiKey,

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

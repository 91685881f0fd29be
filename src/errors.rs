use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error(transparent)]
    Api(#[from] fillout_api::ApiError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

//! # Fillout
//!
//! Typed async client for the Fillout forms REST API.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use fillout::ClientConfig;
//!
//! let fillout = ClientConfig::new("sk_prod_...").into_client()?;
//! for form in fillout.get_forms().await? {
//!     println!("{} {}", form.form_id, form.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;

// Re-export main public types
pub use config::ClientConfig;
pub use errors::{ConfigError, Result};

pub use fillout_api::{ApiConfig, ApiError, Fillout, FilloutApiClient};
pub use fillout_core::models::*;
pub use fillout_core::query::{
    GetSubmissionOptions, ListSubmissionsOptions, SortOrder, SubmissionStatus,
};
pub use fillout_core::{CoreError, Region};

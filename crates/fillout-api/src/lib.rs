//! # Fillout API
//!
//! Async HTTP client for the Fillout REST API.
//! [`FilloutApiClient`] handles authentication, URL construction and error
//! normalization; [`Fillout`] exposes one method per remote operation.

pub mod client;
pub mod errors;
pub mod sdk;

// Re-export common types for convenience
pub use client::*;
pub use errors::*;
pub use sdk::*;

// Re-export core types that API consumers will need
pub use fillout_core::{
    CoreError, CreateSubmissionsResponse, Form, FormSummary, GetSubmissionOptions,
    ListSubmissionsOptions, Region, SortOrder, Submission, SubmissionPage, SubmissionStatus,
    Webhook,
};

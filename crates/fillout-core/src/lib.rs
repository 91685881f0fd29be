//! # Fillout Core
//!
//! Core domain logic for the Fillout REST API client.
//!
//! This crate contains pure logic with no I/O dependencies:
//! - Wire models for forms, submissions and webhooks
//! - Error definitions
//! - Region endpoint table and API key format check
//! - Query-string construction and error-message extraction
//!
//! Decoding is structural and forgiving: unknown fields are ignored and
//! missing collections come back empty.

pub mod errors;
pub mod models;
pub mod query;
pub mod region;
pub mod utils;

// Re-export commonly used types
pub use errors::{CoreError, Result, DEVELOPER_SETTINGS_URL};
pub use models::{
    Approval, ApprovalDecision, ApprovalInputField, ApprovalRecord, ApprovalState, Approver,
    Calculation, CalculationType, CalculationValue, CreateSubmissionsResponse, FieldRef, Form,
    FormSummary, FormTag, PaymentStatus, PaymentValue, Question, QuestionOption, QuestionType,
    QuizResult, SchedulingValue, ShowForStates, StateVisibility, Submission, SubmissionAnswer,
    SubmissionCalculation, SubmissionDocument, SubmissionLogin, SubmissionPage, SubmissionPayment,
    SubmissionResponse, SubmissionScheduling, SubmissionUrlParameter, Webhook,
};
pub use query::{
    GetSubmissionOptions, ListSubmissionsOptions, QueryParams, QueryValue, SortOrder,
    SubmissionStatus,
};
pub use region::Region;
pub use utils::{
    extract_error_message, failure_message, is_valid_api_key, mask_secret, validate_api_key,
    API_KEY_PREFIXES,
};

use crate::errors::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

// Response structs decode with `#[serde(default)]`: missing fields come back
// empty, and so do fields sent as an explicit `null`. `Option` fields stay
// `None` in both cases.

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of the form listing
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSummary {
    #[serde(alias = "id", deserialize_with = "null_as_default")]
    pub form_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<FormTag>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FormTag {
    Form,
    Quiz,
    Survey,
    Scheduling,
    #[serde(other)]
    Unknown,
}

/// Full metadata of a form
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Form {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
    #[serde(deserialize_with = "null_as_default")]
    pub calculations: Vec<Calculation>,
    #[serde(deserialize_with = "null_as_default")]
    pub url_parameters: Vec<FieldRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub documents: Vec<FieldRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub scheduling: Vec<FieldRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub payments: Vec<FieldRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvals: Option<Vec<Approval>>,
}

impl Form {
    /// Decode a form from raw JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// An `{id, name}` pair naming a URL parameter, document, scheduling or
/// payment field
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FieldRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Question {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct QuestionOption {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

macro_rules! question_types {
    ($($variant:ident => $tag:literal),* $(,)?) => {
        /// Kind of a form question.
        ///
        /// Tags the client does not know yet are kept verbatim in
        /// [`QuestionType::Other`].
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum QuestionType {
            $($variant,)*
            Other(String),
        }

        impl QuestionType {
            pub fn as_str(&self) -> &str {
                match self {
                    $(QuestionType::$variant => $tag,)*
                    QuestionType::Other(tag) => tag.as_str(),
                }
            }
        }

        impl From<String> for QuestionType {
            fn from(tag: String) -> Self {
                match tag.as_str() {
                    $($tag => QuestionType::$variant,)*
                    _ => QuestionType::Other(tag),
                }
            }
        }
    };
}

question_types! {
    Address => "Address",
    AudioRecording => "AudioRecording",
    Calcom => "Calcom",
    Calendly => "Calendly",
    Captcha => "Captcha",
    Checkbox => "Checkbox",
    Checkboxes => "Checkboxes",
    ColorPicker => "ColorPicker",
    CurrencyInput => "CurrencyInput",
    DatePicker => "DatePicker",
    DateRange => "DateRange",
    DateTimePicker => "DateTimePicker",
    Dropdown => "Dropdown",
    EmailInput => "EmailInput",
    FileUpload => "FileUpload",
    ImagePicker => "ImagePicker",
    LocationCoordinates => "LocationCoordinates",
    LongAnswer => "LongAnswer",
    Matrix => "Matrix",
    MultiSelect => "MultiSelect",
    MultipleChoice => "MultipleChoice",
    NumberInput => "NumberInput",
    OpinionScale => "OpinionScale",
    Password => "Password",
    Payment => "Payment",
    PhoneNumber => "PhoneNumber",
    Ranking => "Ranking",
    RecordPicker => "RecordPicker",
    ShortAnswer => "ShortAnswer",
    Signature => "Signature",
    Slider => "Slider",
    StarRating => "StarRating",
    Subform => "Subform",
    Switch => "Switch",
    TimePicker => "TimePicker",
    UrlInput => "URLInput",
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Other(String::new())
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Calculation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub calculation_type: CalculationType,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CalculationType {
    Text,
    Number,
    Duration,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Approval workflow attached to a form
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Approval {
    #[serde(deserialize_with = "null_as_default")]
    pub workflow_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub approvers: Vec<Approver>,
    #[serde(deserialize_with = "null_as_default")]
    pub states: Vec<ApprovalState>,
    #[serde(deserialize_with = "null_as_default")]
    pub input_fields: Vec<ApprovalInputField>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Approver {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApprovalState {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_node_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApprovalInputField {
    #[serde(deserialize_with = "null_as_default")]
    pub custom_field_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub show_for_states: ShowForStates,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowForStates {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub visibility: StateVisibility,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_state_ids: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StateVisibility {
    #[default]
    All,
    Custom,
}

/// One response to a form, finished or in progress
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Submission {
    #[serde(deserialize_with = "null_as_default")]
    pub submission_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub submission_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub questions: Vec<SubmissionAnswer>,
    #[serde(deserialize_with = "null_as_default")]
    pub calculations: Vec<SubmissionCalculation>,
    #[serde(deserialize_with = "null_as_default")]
    pub quiz: QuizResult,
    #[serde(deserialize_with = "null_as_default")]
    pub documents: Vec<SubmissionDocument>,
    #[serde(deserialize_with = "null_as_default")]
    pub scheduling: Vec<SubmissionScheduling>,
    #[serde(deserialize_with = "null_as_default")]
    pub payments: Vec<SubmissionPayment>,
    #[serde(deserialize_with = "null_as_default")]
    pub url_parameters: Vec<SubmissionUrlParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvals: Option<Vec<ApprovalRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<SubmissionLogin>,
}

impl Submission {
    /// Decode a submission from raw JSON, e.g. the body of a webhook delivery
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Raw answer value for a question
    pub fn answer(&self, question_id: &str) -> Option<&Value> {
        self.questions
            .iter()
            .find(|q| q.id == question_id)
            .map(|q| &q.value)
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.submission_time)
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_updated_at)
    }

    pub fn started(&self) -> Option<DateTime<Utc>> {
        self.started_at.as_deref().and_then(parse_timestamp)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SubmissionAnswer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub question_type: QuestionType,
    /// Shape depends on the question type
    pub value: Value,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SubmissionCalculation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub calculation_type: CalculationType,
    pub value: Option<CalculationValue>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum CalculationValue {
    Number(serde_json::Number),
    Text(String),
}

/// Quiz outcome; both fields are absent for non-quiz forms
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SubmissionDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SubmissionScheduling {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub value: Option<SchedulingValue>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulingValue {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_start_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_end_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reschedule_or_cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_user_email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SubmissionPayment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub value: Option<PaymentValue>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_customer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_subscription_id: Option<String>,
}

/// Stripe payment status as reported by Fillout
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    SucceededFree,
    TrialCreated,
    /// Sent as an empty string
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SubmissionUrlParameter {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub value: Option<String>,
}

/// Progress of a submission through an approval workflow
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApprovalRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub workflow_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub workflow_run_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub decisions: Vec<ApprovalDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_state_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApprovalDecision {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub selected_state_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SubmissionLogin {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// One page of submissions
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmissionPage {
    #[serde(deserialize_with = "null_as_default")]
    pub responses: Vec<Submission>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_responses: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub page_count: u64,
}

/// Envelope returned by the single-submission endpoint
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SubmissionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub submission: Submission,
}

/// A registered webhook; only its id is known client-side
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Webhook {
    pub id: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CreateSubmissionsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>, // Whatever else the server returns
}

//! Query-string options for submission endpoints.
//!
//! Every option struct folds into a [`QueryParams`] through the same
//! truthiness rule: `None`, `false`, `0` and `""` are left out of the query
//! entirely, anything else is stringified.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A value that may appear in a query string
pub trait QueryValue {
    /// The stringified value, or `None` when the value is falsy and the key
    /// must be omitted
    fn to_query_value(&self) -> Option<String>;
}

impl QueryValue for bool {
    fn to_query_value(&self) -> Option<String> {
        self.then(|| "true".to_string())
    }
}

impl QueryValue for str {
    fn to_query_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Option<String> {
        self.as_str().to_query_value()
    }
}

macro_rules! impl_query_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> Option<String> {
                    (*self != 0).then(|| self.to_string())
                }
            }
        )*
    };
}

impl_query_value_for_int!(u8, u16, u32, u64, usize, i32, i64);

impl<T: QueryValue> QueryValue for Option<T> {
    fn to_query_value(&self) -> Option<String> {
        self.as_ref().and_then(|value| value.to_query_value())
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> Option<String> {
        (**self).to_query_value()
    }
}

/// Ordered list of query parameters with falsy values already dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` if `value` is truthy. A repeated key replaces the earlier
    /// value in place.
    pub fn push<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) -> &mut Self {
        if let Some(value) = value.to_query_value() {
            match self.pairs.iter_mut().find(|(k, _)| k == key) {
                Some(existing) => existing.1 = value,
                None => self.pairs.push((key.to_string(), value)),
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Which submissions to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    InProgress,
    Finished,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::InProgress => "in_progress",
            SubmissionStatus::Finished => "finished",
        }
    }
}

impl QueryValue for SubmissionStatus {
    fn to_query_value(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// Ordering of listed submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl QueryValue for SortOrder {
    fn to_query_value(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// Filters for listing the submissions of a form.
///
/// The server accepts a `limit` between 1 and 150 (default 50) and an
/// `offset` defaulting to 0; values are forwarded as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubmissionsOptions {
    pub limit: Option<u32>,
    /// Only submissions submitted after this date
    pub after_date: Option<String>,
    /// Only submissions submitted before this date
    pub before_date: Option<String>,
    pub offset: Option<u32>,
    /// `InProgress` lists unfinished submissions; the server default is
    /// finished ones only
    pub status: Option<SubmissionStatus>,
    pub include_edit_link: Option<bool>,
    pub include_preview: Option<bool>,
    pub sort: Option<SortOrder>,
    /// Only submissions containing this text
    pub search: Option<String>,
}

impl ListSubmissionsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn after(mut self, date: DateTime<Utc>) -> Self {
        self.after_date = Some(format_date(date));
        self
    }

    pub fn before(mut self, date: DateTime<Utc>) -> Self {
        self.before_date = Some(format_date(date));
        self
    }

    pub fn status(mut self, status: SubmissionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn include_edit_link(mut self, include: bool) -> Self {
        self.include_edit_link = Some(include);
        self
    }

    pub fn include_preview(mut self, include: bool) -> Self {
        self.include_preview = Some(include);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("limit", &self.limit)
            .push("afterDate", &self.after_date)
            .push("beforeDate", &self.before_date)
            .push("offset", &self.offset)
            .push("status", &self.status)
            .push("includeEditLink", &self.include_edit_link)
            .push("includePreview", &self.include_preview)
            .push("sort", &self.sort)
            .push("search", &self.search);
        params
    }
}

/// Options for fetching a single submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSubmissionOptions {
    pub include_edit_link: Option<bool>,
}

impl GetSubmissionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_edit_link(mut self, include: bool) -> Self {
        self.include_edit_link = Some(include);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("includeEditLink", &self.include_edit_link);
        params
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_falsy_values_are_omitted() {
        let mut params = QueryParams::new();
        params
            .push("unset", &None::<String>)
            .push("zero", &0u32)
            .push("empty", "")
            .push("no", &false)
            .push("some_zero", &Some(0u32))
            .push("some_empty", &Some(String::new()));

        assert!(params.is_empty());
    }

    #[test]
    fn test_truthy_values_are_stringified() {
        let mut params = QueryParams::new();
        params
            .push("limit", &Some(10u32))
            .push("yes", &true)
            .push("search", "hello world")
            .push("status", &SubmissionStatus::InProgress);

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("limit", "10"),
                ("yes", "true"),
                ("search", "hello world"),
                ("status", "in_progress"),
            ]
        );
    }

    #[test]
    fn test_repeated_key_replaces_value() {
        let mut params = QueryParams::new();
        params.push("limit", &5u32).push("limit", &7u32).push("limit", &0u32);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("limit"), Some("7"));
    }

    #[test]
    fn test_list_submissions_defaults_produce_empty_query() {
        assert!(ListSubmissionsOptions::default().to_query().is_empty());

        let options = ListSubmissionsOptions {
            limit: Some(0),
            offset: Some(0),
            include_edit_link: Some(false),
            include_preview: Some(false),
            search: Some(String::new()),
            after_date: Some(String::new()),
            ..Default::default()
        };
        assert!(options.to_query().is_empty());
    }

    #[test]
    fn test_list_submissions_query_order() {
        let options = ListSubmissionsOptions::new()
            .search("acme")
            .sort(SortOrder::Desc)
            .include_preview(true)
            .include_edit_link(true)
            .status(SubmissionStatus::Finished)
            .offset(100)
            .before(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
            .after(Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap())
            .limit(150);

        let query = options.to_query();
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("limit", "150"),
                ("afterDate", "2024-01-01T12:30:00.000Z"),
                ("beforeDate", "2024-02-01T00:00:00.000Z"),
                ("offset", "100"),
                ("status", "finished"),
                ("includeEditLink", "true"),
                ("includePreview", "true"),
                ("sort", "desc"),
                ("search", "acme"),
            ]
        );
    }

    #[test]
    fn test_get_submission_query() {
        assert!(GetSubmissionOptions::default().to_query().is_empty());
        assert!(GetSubmissionOptions::new()
            .include_edit_link(false)
            .to_query()
            .is_empty());

        let query = GetSubmissionOptions::new().include_edit_link(true).to_query();
        assert_eq!(query.get("includeEditLink"), Some("true"));
    }
}

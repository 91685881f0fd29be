use crate::errors::{CoreError, Result};
use serde_json::Value;

/// Prefixes a Fillout API key may start with
pub const API_KEY_PREFIXES: [&str; 2] = ["sk_prod_", "fillout_token_"];

/// Check whether a key has a recognized Fillout format.
///
/// This is a format check only; it never contacts the network.
pub fn is_valid_api_key(api_key: &str) -> bool {
    API_KEY_PREFIXES
        .iter()
        .any(|prefix| api_key.starts_with(prefix))
}

/// Validate an API key, returning [`CoreError::InvalidApiKey`] when the
/// format is not recognized
pub fn validate_api_key(api_key: &str) -> Result<()> {
    if is_valid_api_key(api_key) {
        Ok(())
    } else {
        Err(CoreError::InvalidApiKey)
    }
}

/// Shorten a secret for log output, e.g. `sk_p...abcd`
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Pull a human-readable message out of an error response body.
///
/// Only bodies declared as `application/json` are inspected. Returns `None`
/// when the body does not parse or carries no usable `message` field.
pub fn extract_error_message(content_type: Option<&str>, body: &str) -> Option<String> {
    let media_type = content_type?.split(';').next()?.trim();
    if !media_type.eq_ignore_ascii_case("application/json") {
        return None;
    }

    let parsed: Value = serde_json::from_str(body).ok()?;
    match parsed.get("message")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}

/// Fallback message used when the service gave no message of its own
pub fn failure_message(action: &str, status: u16) -> String {
    format!("Failed to {} with status code {}", action, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_prefixes() {
        assert!(is_valid_api_key("sk_prod_abc123"));
        assert!(is_valid_api_key("fillout_token_abc123"));
        assert!(validate_api_key("sk_prod_").is_ok());

        assert!(!is_valid_api_key(""));
        assert!(!is_valid_api_key("sk_test_abc123"));
        assert!(!is_valid_api_key(" sk_prod_abc123"));
        assert!(!is_valid_api_key("SK_PROD_abc123"));
        assert!(matches!(
            validate_api_key("not-a-key"),
            Err(CoreError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_invalid_api_key_message() {
        assert_eq!(
            CoreError::InvalidApiKey.to_string(),
            "Invalid Fillout API key. Visit https://build.fillout.com/home/settings/developer to create one."
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("sk_prod_1234567890abcd"), "sk_p...abcd");
        assert_eq!(mask_secret("short"), "*****");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn test_extract_error_message_json() {
        let body = r#"{"message": "Form not found"}"#;
        assert_eq!(
            extract_error_message(Some("application/json"), body),
            Some("Form not found".to_string())
        );
        assert_eq!(
            extract_error_message(Some("application/json; charset=utf-8"), body),
            Some("Form not found".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_fallbacks() {
        // Not JSON
        assert_eq!(
            extract_error_message(Some("text/html"), r#"{"message": "nope"}"#),
            None
        );
        assert_eq!(extract_error_message(None, r#"{"message": "nope"}"#), None);

        // JSON without a usable message
        assert_eq!(
            extract_error_message(Some("application/json"), r#"{"error": "x"}"#),
            None
        );
        assert_eq!(
            extract_error_message(Some("application/json"), r#"{"message": ""}"#),
            None
        );
        assert_eq!(
            extract_error_message(Some("application/json"), r#"{"message": null}"#),
            None
        );

        // Malformed JSON must not blow up
        assert_eq!(
            extract_error_message(Some("application/json"), "<html>oops"),
            None
        );
        assert_eq!(extract_error_message(Some("application/json"), ""), None);
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            failure_message("fetch Fillout forms", 500),
            "Failed to fetch Fillout forms with status code 500"
        );
    }
}

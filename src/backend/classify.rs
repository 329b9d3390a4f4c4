//! Maps backend error responses to [`AssistantError`] values.

use crate::error::AssistantError;
use crate::model::{ApiErrorResponse, BackendErrorResponse};

pub const UNEXPECTED_SERVER_ERROR: &str =
    "An unexpected server error occurred. Please try again later.";
pub const UNKNOWN_API_ERROR: &str =
    "An unknown error occurred while contacting the server. Please try again later.";
pub const MISSING_RECIPE: &str =
    "Unexpected response from the server while generating the recipe: no recipe found.";
pub const HEADLINES_UNKNOWN_ERROR: &str = "Unknown error while fetching headlines.";
pub const PAYMENT_REQUIRED_DEFAULT: &str =
    "A payment or subscription action is required to continue.";

const QUOTA_MARKERS: [&str; 3] = [
    "exceeded your monthly included credits",
    "exceeded your current quota",
    "quota exceeded",
];

/// Decodes an error body, falling back to an empty one when it is not JSON.
pub fn decode_error_body(body: &str) -> ApiErrorResponse {
    serde_json::from_str(body).unwrap_or_default()
}

/// Classifies a failed call to the generation endpoint.
pub fn generation_error(status: u16, body: &ApiErrorResponse) -> AssistantError {
    if status == 402 {
        let text = message_or_error(body).unwrap_or_default();
        if is_quota_exhausted(text) {
            return AssistantError::QuotaExceeded;
        }
        let details = if text.is_empty() {
            PAYMENT_REQUIRED_DEFAULT
        } else {
            text
        };
        return AssistantError::PaymentRequired(details.to_string());
    }

    AssistantError::Api {
        status,
        message: describe(body),
    }
}

/// Classifies a failed call to the save endpoint.
pub fn save_error(status: u16, body: &ApiErrorResponse) -> AssistantError {
    match message_or_error(body) {
        Some(message) => AssistantError::Api {
            status,
            message: message.to_string(),
        },
        None => AssistantError::SaveFailed { status },
    }
}

/// Classifies a failed call to the search endpoint.
///
/// Returns `None` for 404, which means no stored recipe matched.
pub fn search_error(status: u16, body: &ApiErrorResponse) -> Option<AssistantError> {
    if status == 404 {
        return None;
    }
    let message = message_or_error(body)
        .unwrap_or(UNKNOWN_API_ERROR)
        .to_string();
    Some(AssistantError::Api { status, message })
}

/// Classifies a non-2xx response from the headlines endpoint.
pub fn headlines_http_error(status: u16, reason: &str, body: &str) -> AssistantError {
    let parsed: BackendErrorResponse = serde_json::from_str(body).unwrap_or_default();
    let message = match parsed.message.filter(|m| !m.is_empty()) {
        Some(message) => {
            let mut text = format!("Backend error: {message}");
            if let Some(code) = parsed.code {
                text.push_str(&format!(" (code: {code})"));
            }
            if let Some(details) = parsed.details {
                text.push_str(&format!(" (details: {details})"));
            }
            text
        }
        None => format!("HTTP error: {status} {reason}").trim_end().to_string(),
    };
    AssistantError::Headlines(message)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

/// `message`, else `error`, skipping empty strings.
fn message_or_error(body: &ApiErrorResponse) -> Option<&str> {
    non_empty(&body.message).or_else(|| non_empty(&body.error))
}

fn is_quota_exhausted(text: &str) -> bool {
    let lowered = text.to_lowercase();
    QUOTA_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Best human-readable description of an error body.
fn describe(body: &ApiErrorResponse) -> String {
    if let Some(message) = non_empty(&body.message) {
        return message.to_string();
    }
    if let Some(errors) = body.errors.as_ref().filter(|errors| !errors.is_empty()) {
        return errors
            .iter()
            .map(|e| match &e.path {
                Some(path) => format!("{}: {}", path, e.msg),
                None => e.msg.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
    }
    if let Some(error) = non_empty(&body.error) {
        return error.to_string();
    }
    UNEXPECTED_SERVER_ERROR.to_string()
}

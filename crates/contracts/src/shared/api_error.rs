//! Errors returned by the REST service layer and the JSON envelope around
//! successful responses.

use crate::shared::validation::FieldErrors;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 422 with per-field messages.
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    #[error("resource not found")]
    NotFound,

    #[error("not authorized")]
    Unauthorized,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Error body as the backend sends it. Either `message` or `error` carries
/// the text; `errors` only comes with 422.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    errors: Option<FieldErrors>,
}

impl ApiError {
    /// Classifies a non-2xx response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty());

        match status {
            422 => ApiError::Validation {
                message: message.unwrap_or_else(|| "The given data was invalid.".to_string()),
                errors: parsed.errors.unwrap_or_default(),
            },
            404 => ApiError::NotFound,
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Http {
                status,
                message: message.unwrap_or_else(|| default_status_text(status).to_string()),
            },
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation { .. })
    }

    /// Text for a toast notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Cannot reach the server. Check your connection.".to_string(),
            ApiError::Validation { message, errors } => {
                errors.summary().unwrap_or_else(|| message.clone())
            }
            ApiError::NotFound => "Data not found.".to_string(),
            ApiError::Unauthorized => "You are not allowed to do this.".to_string(),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
        }
    }
}

fn default_status_text(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        409 => "Conflict",
        500..=599 => "Server error",
        _ => "Request failed",
    }
}

/// `{ "success": true, "message": "...", "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeEnveloped<T> {
    Enveloped(ApiEnvelope<T>),
    Bare(T),
}

/// Decodes a successful body, with or without the envelope.
pub fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<MaybeEnveloped<T>>(body) {
        Ok(MaybeEnveloped::Enveloped(envelope)) => {
            if envelope.success == Some(false) {
                return Err(ApiError::Http {
                    status: 200,
                    message: envelope
                        .message
                        .unwrap_or_else(|| "Request failed".to_string()),
                });
            }
            Ok(envelope.data)
        }
        Ok(MaybeEnveloped::Bare(data)) => Ok(data),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Decodes the answer to a create or update. An empty body (204) or a body
/// that is not the record yields `Ok(None)`.
pub fn decode_saved<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = decode_data(body)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::Paginated;

    #[test]
    fn test_422_merges_field_errors() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "customer_name": ["The customer name field is required."],
                "email": ["The email must be a valid email address."]
            }
        }"#;
        let err = ApiError::from_response(422, body);
        let errors = err.field_errors().unwrap();
        assert_eq!(
            errors.first("customer_name"),
            Some("The customer name field is required.")
        );
        assert_eq!(errors.len(), 2);
        assert!(err.is_validation());
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_response(404, ""), ApiError::NotFound);
        assert_eq!(ApiError::from_response(401, "{}"), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_response(500, r#"{"error":"db down"}"#),
            ApiError::Http {
                status: 500,
                message: "db down".to_string()
            }
        );
        assert_eq!(
            ApiError::from_response(502, "<html>"),
            ApiError::Http {
                status: 502,
                message: "Server error".to_string()
            }
        );
    }

    #[test]
    fn test_decode_enveloped_and_bare() {
        let wrapped = r#"{"success":true,"message":"ok","data":{"data":[1,2],"pagination":{"page":1,"limit":10,"total":2,"total_pages":1}}}"#;
        let page: Paginated<i32> = decode_data(wrapped).unwrap();
        assert_eq!(page.data, vec![1, 2]);

        let bare = r#"{"data":[3],"pagination":{"page":1,"limit":10,"total":1,"total_pages":1}}"#;
        let page: Paginated<i32> = decode_data(bare).unwrap();
        assert_eq!(page.data, vec![3]);
    }

    #[test]
    fn test_decode_unsuccessful_envelope() {
        let body = r#"{"success":false,"message":"Quotation is locked","data":null}"#;
        let result: Result<Option<i32>, ApiError> = decode_data(body);
        assert_eq!(
            result,
            Err(ApiError::Http {
                status: 200,
                message: "Quotation is locked".to_string()
            })
        );
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Saved {
        id: i64,
    }

    #[test]
    fn test_decode_saved_accepts_empty_and_message_bodies() {
        assert_eq!(decode_saved::<Saved>(""), Ok(None));
        assert_eq!(decode_saved::<Saved>("  \n"), Ok(None));
        assert_eq!(decode_saved::<Saved>(r#"{"message":"Updated"}"#), Ok(None));
        assert_eq!(decode_saved::<Saved>(r#"{"id":4}"#), Ok(Some(Saved { id: 4 })));
        assert_eq!(
            decode_saved::<Saved>(r#"{"success":true,"data":{"id":5}}"#),
            Ok(Some(Saved { id: 5 }))
        );
        assert!(matches!(
            decode_saved::<Saved>(r#"{"success":false,"message":"Locked","data":null}"#),
            Err(ApiError::Http { status: 200, .. })
        ));
    }

    #[test]
    fn test_user_message_prefers_field_summary() {
        let err = ApiError::from_response(
            422,
            r#"{"message":"invalid","errors":{"phone":["Phone is taken"]}}"#,
        );
        assert_eq!(err.user_message(), "Phone is taken");
    }
}

//! Failure normalization.
//!
//! Every request failure, whatever its shape, is reduced to one non-empty
//! display string before it reaches a view or a toast.

use serde_json::Value;
use shared::ApiError;

/// Shown when a failure carries nothing usable (transport errors included)
pub const GENERIC_ERROR_MESSAGE: &str = "Connection error";

/// Field whose validation message wins when several fields failed
const PRIORITY_FIELD: &str = "password";

/// The single error shape consumed by views and notifications
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NormalizedError {
    pub message: String,
}

impl NormalizedError {
    pub fn generic() -> Self {
        Self {
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<&ApiError> for NormalizedError {
    fn from(err: &ApiError) -> Self {
        normalize(err.payload())
    }
}

impl From<ApiError> for NormalizedError {
    fn from(err: ApiError) -> Self {
        Self::from(&err)
    }
}

fn non_empty_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Pick a display message from a failure payload.
///
/// 1. Anything but a JSON object yields the generic message.
/// 2. A non-empty `errors` map yields its `password` entry, else the first
///    usable entry in document order.
/// 3. Otherwise the top-level `message`, else the generic message.
pub fn normalize(payload: Option<&Value>) -> NormalizedError {
    let Some(Value::Object(body)) = payload else {
        return NormalizedError::generic();
    };

    if let Some(Value::Object(fields)) = body.get("errors") {
        let picked = fields
            .get(PRIORITY_FIELD)
            .and_then(non_empty_text)
            .or_else(|| fields.values().find_map(non_empty_text));
        if let Some(message) = picked {
            return NormalizedError {
                message: message.to_string(),
            };
        }
    }

    body.get("message")
        .and_then(non_empty_text)
        .map(|message| NormalizedError {
            message: message.to_string(),
        })
        .unwrap_or_else(NormalizedError::generic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::ApiErrorResponse;

    fn message(payload: Value) -> String {
        normalize(Some(&payload)).message
    }

    #[test]
    fn password_error_wins_over_message() {
        let payload = json!({"errors": {"password": "too weak"}, "message": "Invalid"});
        assert_eq!(message(payload), "too weak");
    }

    #[test]
    fn password_error_wins_over_earlier_fields() {
        let payload = json!({
            "errors": {"email": "Invalid email", "password": "too short"},
            "message": "Invalid request"
        });
        assert_eq!(message(payload), "too short");
    }

    #[test]
    fn first_field_error_in_document_order_without_password() {
        let payload = json!({
            "errors": {"username": "taken", "email": "Invalid email"},
            "message": "Invalid request"
        });
        assert_eq!(message(payload), "taken");
    }

    #[test]
    fn top_level_message_without_errors() {
        assert_eq!(message(json!({"message": "Invalid"})), "Invalid");
    }

    #[test]
    fn null_or_empty_errors_fall_back_to_message() {
        assert_eq!(
            message(json!({"errors": null, "message": "Accès refusé"})),
            "Accès refusé"
        );
        assert_eq!(message(json!({"errors": {}, "message": "Conflict"})), "Conflict");
    }

    #[test]
    fn blank_field_messages_are_skipped() {
        let payload = json!({"errors": {"password": "", "email": 42, "username": "bad"}});
        assert_eq!(message(payload), "bad");
    }

    #[test]
    fn unusable_errors_and_missing_message_yield_generic() {
        assert_eq!(message(json!({"errors": {"password": ""}})), GENERIC_ERROR_MESSAGE);
        assert_eq!(message(json!({"message": "   "})), GENERIC_ERROR_MESSAGE);
        assert_eq!(message(json!({})), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn non_object_payloads_yield_generic() {
        for payload in [json!("Bad Gateway"), json!(null), json!([1, 2]), json!(500)] {
            assert_eq!(message(payload), GENERIC_ERROR_MESSAGE);
        }
        assert_eq!(normalize(None).message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn normalizes_backend_error_response() {
        let body = ApiErrorResponse {
            status: 400,
            message: Some("Invalid request".into()),
            errors: Some(
                json!({"password": "Le mot de passe doit contenir au moins 8 caractères"})
                    .as_object()
                    .cloned()
                    .unwrap(),
            ),
            timestamp: None,
        };
        let err = ApiError::Server {
            status: 400,
            body: Some(serde_json::to_value(body).unwrap()),
        };
        assert_eq!(
            NormalizedError::from(&err).message,
            "Le mot de passe doit contenir au moins 8 caractères"
        );
    }

    #[test]
    fn transport_and_auth_failures() {
        let network = ApiError::Network("connection refused".into());
        assert_eq!(NormalizedError::from(network).message, GENERIC_ERROR_MESSAGE);

        let auth = ApiError::Auth {
            body: Some(json!({"status": 401, "message": "Email ou mot de passe incorrect"})),
        };
        assert_eq!(
            NormalizedError::from(auth).message,
            "Email ou mot de passe incorrect"
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let payload = json!({"errors": {"a": "x", "b": "y"}});
        let first = normalize(Some(&payload));
        for _ in 0..10 {
            assert_eq!(normalize(Some(&payload)), first);
        }
        assert_eq!(first.to_string(), "x");
    }
}

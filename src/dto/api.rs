//! Error body shared by every failing API response.

use serde::{Deserialize, Serialize};

/// `{ message, error?, errors? }` as returned on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    /// Underlying cause of a store or I/O failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// One entry per invalid payload field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
            errors: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Body of a successful photo upload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_fields() {
        let body =
            serde_json::to_value(ErrorResponse::message("No se encontro el cliente.")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "No se encontro el cliente."})
        );
    }

    #[test]
    fn includes_cause_and_field_errors() {
        let body = ErrorResponse::message("La petición contiene errores.")
            .with_errors(vec!["El campo [EMAIL] no puede estar vacío".into()])
            .with_error("cause");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["errors"][0], "El campo [EMAIL] no puede estar vacío");
        assert_eq!(value["error"], "cause");
    }

    #[test]
    fn empty_message_response_is_empty_object() {
        let value = serde_json::to_value(MessageResponse::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}

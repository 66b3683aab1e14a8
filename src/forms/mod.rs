//! Request payloads accepted by the client routes.

use std::fmt::{Display, Formatter};

pub mod client;

/// Validation failure attached to a single payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as it appears in the JSON payload.
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "El campo [{}] {}", self.field.to_uppercase(), self.message)
    }
}

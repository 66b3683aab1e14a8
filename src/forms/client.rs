use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::{ValidateEmail, ValidateLength};

use crate::domain::client::{NewClient, UpdateClient};
use crate::forms::FieldError;

const MSG_REQUIRED: &str = "no puede estar vacío";
const MSG_NAME_LENGTH: &str = "el tamaño tiene que estar entre 4 y 12";
const MSG_EMAIL: &str = "no es una dirección de correo bien formada";
const MSG_NOT_NULL: &str = "no puede ser nulo";

#[derive(Debug, Clone, Default, Deserialize)]
/// JSON body used to create or overwrite a client.
///
/// Every field is optional at the parsing stage so missing values are
/// reported as field errors by the conversions instead of a decoding error.
pub struct ClientPayload {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<NaiveDate>,
}

/// Field values that passed validation.
#[derive(Debug)]
struct CheckedFields {
    first_name: String,
    last_name: String,
    email: String,
    created_at: NaiveDate,
}

fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<&str>,
) -> Option<String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => Some(v.to_string()),
        None => {
            errors.push(FieldError::new(field, MSG_REQUIRED));
            None
        }
    }
}

impl ClientPayload {
    /// Runs every field rule and reports all failures together.
    fn check(&self) -> Result<CheckedFields, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = required(&mut errors, "nombre", self.nombre.as_deref());
        if let Some(name) = &first_name {
            if !name.validate_length(Some(4u64), Some(12u64), None) {
                errors.push(FieldError::new("nombre", MSG_NAME_LENGTH));
            }
        }

        let last_name = required(&mut errors, "apellido", self.apellido.as_deref());

        let email = required(&mut errors, "email", self.email.as_deref());
        if let Some(email) = &email {
            if !email.validate_email() {
                errors.push(FieldError::new("email", MSG_EMAIL));
            }
        }

        if self.created_at.is_none() {
            errors.push(FieldError::new("createdAt", MSG_NOT_NULL));
        }

        match (first_name, last_name, email, self.created_at) {
            (Some(first_name), Some(last_name), Some(email), Some(created_at))
                if errors.is_empty() =>
            {
                Ok(CheckedFields {
                    first_name,
                    last_name,
                    email,
                    created_at,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn to_new_client(&self) -> Result<NewClient, Vec<FieldError>> {
        let fields = self.check()?;
        Ok(NewClient::new(
            &fields.first_name,
            &fields.last_name,
            &fields.email,
            fields.created_at,
        ))
    }

    pub fn to_update_client(&self) -> Result<UpdateClient, Vec<FieldError>> {
        let fields = self.check()?;
        Ok(UpdateClient::new(
            &fields.first_name,
            &fields.last_name,
            &fields.email,
            fields.created_at,
        ))
    }
}

#[derive(MultipartForm)]
/// Multipart body of the photo upload route.
pub struct UploadImageForm {
    #[multipart(limit = "10MB")]
    pub image: TempFile,
    pub id: Text<i32>,
}

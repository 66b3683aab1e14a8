use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Client {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    /// File name of the photo stored in the upload directory.
    #[serde(rename = "imagen")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: NaiveDate,
}

impl NewClient {
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, email: &str, created_at: NaiveDate) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_lowercase(),
            created_at,
        }
    }
}

/// Full overwrite of the editable client fields. Identity and image are left alone.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: NaiveDate,
}

impl UpdateClient {
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, email: &str, created_at: NaiveDate) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_lowercase(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_normalizes_input() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 22).unwrap();
        let client = NewClient::new("  Luis ", "Lira ", " Luis@Example.COM ", date);
        assert_eq!(client.first_name, "Luis");
        assert_eq!(client.last_name, "Lira");
        assert_eq!(client.email, "luis@example.com");
        assert_eq!(client.created_at, date);
    }

    #[test]
    fn client_serializes_with_wire_names() {
        let client = Client {
            id: 3,
            first_name: "Andres".into(),
            last_name: "Guzman".into(),
            email: "andres@example.com".into(),
            created_at: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            image: None,
        };
        let value = serde_json::to_value(&client).unwrap();
        assert_eq!(value["nombre"], "Andres");
        assert_eq!(value["apellido"], "Guzman");
        assert_eq!(value["createdAt"], "2020-05-01");
        assert!(value["imagen"].is_null());
    }
}

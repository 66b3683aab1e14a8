//! DTOs shaped for the client list endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Read-only projection of a [`Client`] used by list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientListItem {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    pub imagen: Option<String>,
}

impl From<Client> for ClientListItem {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            nombre: client.first_name,
            apellido: client.last_name,
            email: client.email,
            created_at: client.created_at,
            imagen: client.image,
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_sort() -> String {
    "id".to_string()
}

fn default_order() -> String {
    "desc".to_string()
}

/// Query parameters accepted by `/clientes/paginated`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientsPageQuery {
    /// Zero-based page index.
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_sort")]
    pub sort: String,
    /// `asc` for ascending; anything else sorts descending.
    #[serde(default = "default_order")]
    pub order: String,
}

impl Default for ClientsPageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: default_limit(),
            sort: default_sort(),
            order: default_order(),
        }
    }
}

/// Result of a photo upload.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The uploaded file was empty and nothing changed.
    Skipped,
    /// The photo was stored and the client now references it.
    Stored(Client),
}

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clientes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub created_at: NaiveDate,
    pub imagen: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clientes)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub email: &'a str,
    pub created_at: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clientes)]
/// Data used when overwriting a [`Client`] record.
pub struct UpdateClient<'a> {
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub email: &'a str,
    pub created_at: NaiveDate,
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            first_name: client.nombre,
            last_name: client.apellido,
            email: client.email,
            created_at: client.created_at,
            image: client.imagen,
        }
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            nombre: client.first_name.as_str(),
            apellido: client.last_name.as_str(),
            email: client.email.as_str(),
            created_at: client.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            nombre: client.first_name.as_str(),
            apellido: client.last_name.as_str(),
            email: client.email.as_str(),
            created_at: client.created_at,
        }
    }
}

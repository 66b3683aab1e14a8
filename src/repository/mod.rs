use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::ClientId,
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Diesel-backed store shared by all handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait ClientReader {
    /// Every client in ascending id order.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    /// One page of clients together with the total number of stored clients.
    fn list_clients_page(&self, request: PageRequest) -> RepositoryResult<(usize, Vec<Client>)>;
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, client_id: ClientId, updates: &UpdateClient)
    -> RepositoryResult<Client>;
    fn set_client_image(&self, client_id: ClientId, image: &str) -> RepositoryResult<Client>;
    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
}

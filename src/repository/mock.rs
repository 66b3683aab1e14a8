//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
        fn list_clients_page(&self, request: PageRequest) -> RepositoryResult<(usize, Vec<Client>)>;
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update_client(
            &self,
            client_id: ClientId,
            updates: &UpdateClient,
        ) -> RepositoryResult<Client>;
        fn set_client_image(&self, client_id: ClientId, image: &str) -> RepositoryResult<Client>;
        fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
    }
}

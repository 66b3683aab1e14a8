//! Client operations behind the `/clientes` routes.

use log::{info, warn};

use crate::domain::client::Client;
use crate::domain::types::{ClientId, SortDirection, SortField};
use crate::dto::client::{ClientListItem, ClientsPageQuery, UploadOutcome};
use crate::forms::client::ClientPayload;
use crate::pagination::{Page, PageRequest, Sort};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::uploads::{ImageStore, IncomingImage};

/// Returns every stored client in store order.
pub fn list_clients<R>(repo: &R) -> ServiceResult<Vec<ClientListItem>>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list_clients()?;
    Ok(clients.into_iter().map(ClientListItem::from).collect())
}

/// Returns one page of clients ordered by the requested field.
pub fn list_clients_page<R>(
    repo: &R,
    query: ClientsPageQuery,
) -> ServiceResult<Page<ClientListItem>>
where
    R: ClientReader + ?Sized,
{
    let field: SortField = query.sort.parse()?;
    let sort = Sort {
        field,
        direction: SortDirection::from_param(&query.order),
    };
    let request = PageRequest::checked(query.page, query.limit, sort)?;

    let (total, clients) = repo.list_clients_page(request)?;

    Ok(Page::new(clients, request, total).map(ClientListItem::from))
}

pub fn get_client<R>(repo: &R, client_id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let client_id = ClientId::new(client_id)?;
    repo.get_client_by_id(client_id)?.ok_or(ServiceError::NotFound)
}

/// Validates the payload and persists a new client.
pub fn create_client<R>(repo: &R, payload: &ClientPayload) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let new_client = payload.to_new_client()?;

    let client = repo.create_client(&new_client)?;
    info!("Created client {}", client.id);
    Ok(client)
}

/// Overwrites names, email and creation date of an existing client.
///
/// The payload is validated before the client is looked up.
pub fn update_client<R>(
    repo: &R,
    client_id: i32,
    payload: &ClientPayload,
) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let updates = payload.to_update_client()?;
    let client_id = ClientId::new(client_id)?;

    if repo.get_client_by_id(client_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let client = repo.update_client(client_id, &updates)?;
    info!("Updated client {}", client.id);
    Ok(client)
}

/// Removes the client's photo, then the client record.
pub fn delete_client<R>(repo: &R, images: &ImageStore, client_id: i32) -> ServiceResult<()>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let client_id = ClientId::new(client_id)?;
    let client = repo
        .get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound)?;

    if let Some(image) = client.image.as_deref() {
        if !images.remove(image) {
            warn!("Image {image} of client {client_id} was not removed");
        }
    }

    repo.delete_client(client_id)?;
    info!("Deleted client {client_id}");
    Ok(())
}

/// Stores a new photo for the client, replacing the previous one.
///
/// An empty upload leaves everything untouched.
pub fn upload_client_image<R>(
    repo: &R,
    images: &ImageStore,
    client_id: i32,
    upload: IncomingImage<'_>,
) -> ServiceResult<UploadOutcome>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if upload.size == 0 {
        return Ok(UploadOutcome::Skipped);
    }

    let client_id = ClientId::new(client_id)?;
    let client = repo
        .get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound)?;

    let stored = images.import(upload)?;

    if let Some(previous) = client.image.as_deref() {
        images.remove(previous);
    }

    let client = repo.set_client_image(client_id, &stored)?;
    Ok(UploadOutcome::Stored(client))
}

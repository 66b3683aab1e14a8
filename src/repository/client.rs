use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::{ClientId, SortDirection, SortField},
    },
    models::client::{
        Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
    },
    pagination::{PageRequest, Sort},
    repository::{
        ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::clientes,
};

type BoxedClientQuery<'a> = clientes::BoxedQuery<'a, Sqlite>;

/// Applies the requested ordering, breaking ties by ascending id.
fn apply_sort(query: BoxedClientQuery<'_>, sort: Sort) -> BoxedClientQuery<'_> {
    use SortDirection::{Asc, Desc};

    let query = match (sort.field, sort.direction) {
        (SortField::Id, Asc) => query.order(clientes::id.asc()),
        (SortField::Id, Desc) => query.order(clientes::id.desc()),
        (SortField::FirstName, Asc) => query.order(clientes::nombre.asc()),
        (SortField::FirstName, Desc) => query.order(clientes::nombre.desc()),
        (SortField::LastName, Asc) => query.order(clientes::apellido.asc()),
        (SortField::LastName, Desc) => query.order(clientes::apellido.desc()),
        (SortField::Email, Asc) => query.order(clientes::email.asc()),
        (SortField::Email, Desc) => query.order(clientes::email.desc()),
        (SortField::CreatedAt, Asc) => query.order(clientes::created_at.asc()),
        (SortField::CreatedAt, Desc) => query.order(clientes::created_at.desc()),
    };

    if sort.field == SortField::Id {
        query
    } else {
        query.then_order_by(clientes::id.asc())
    }
}

impl ClientReader for DieselRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        let mut conn = self.conn()?;

        let items = clientes::table
            .order(clientes::id.asc())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_clients_page(&self, request: PageRequest) -> RepositoryResult<(usize, Vec<Client>)> {
        let mut conn = self.conn()?;

        let total: i64 = clientes::table.count().get_result(&mut conn)?;

        let limit = i64::try_from(request.size)
            .map_err(|_| RepositoryError::ValidationError("page size too large".to_string()))?;
        let offset = i64::try_from(request.offset())
            .map_err(|_| RepositoryError::ValidationError("page offset too large".to_string()))?;

        let items = apply_sort(clientes::table.into_boxed(), request.sort)
            .limit(limit)
            .offset(offset)
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }

    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;

        let client = clientes::table
            .find(id.get())
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();

        let created = diesel::insert_into(clientes::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clientes::table.find(client_id.get()))
            .set(&db_updates)
            .get_result::<DbClient>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_client_image(&self, client_id: ClientId, image: &str) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let updated = diesel::update(clientes::table.find(client_id.get()))
            .set(clientes::imagen.eq(image))
            .get_result::<DbClient>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(clientes::table.find(client_id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#![allow(dead_code)]

use clientes_api::db::{DbPool, establish_connection_pool};
use clientes_api::repository::DieselRepository;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database living in a temporary directory, migrated on creation.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("temp path is not valid UTF-8");

        let pool = establish_connection_pool(database_url).expect("failed to build pool");
        {
            let mut conn = pool.get().expect("failed to get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("failed to run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

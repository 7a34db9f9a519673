//! Test database bootstrap.
//!
//! Connects to `TEST_DATABASE_URL` when set, otherwise to a private in-memory
//! SQLite database. Tables are created straight from entity definitions.

use std::env;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    Schema,
};
use tracing::debug;

pub const DEFAULT_TEST_DATABASE_URL: &str = "sqlite::memory:";

pub fn database_url() -> String {
    env::var("TEST_DATABASE_URL").unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_string())
}

/// Open the test database.
///
/// In-memory SQLite pools are capped at one connection: every pooled
/// connection would otherwise see its own empty database.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = database_url();
    let in_memory = url.starts_with("sqlite::memory:");

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);
    if in_memory {
        opts.max_connections(1).min_connections(1);
    }

    debug!(in_memory, "Connecting test database");
    Database::connect(opts).await
}

/// Create the table for `entity` on `conn`.
pub async fn create_table<C, E>(conn: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    let stmt = schema.create_table_from_entity(entity);
    conn.execute(backend.build(&stmt)).await?;
    debug!(table = entity.table_name(), "Created test table");
    Ok(())
}

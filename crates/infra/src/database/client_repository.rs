//! SQLite-backed client repository.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use gymbook_core::ClientRepository as ClientRepositoryPort;
use gymbook_domain::{Client, ClientType, GymbookError, Result as DomainResult};
use rusqlite::OptionalExtension;
use tokio::task;

use super::manager::{map_join_error, map_sql_error, DbManager};

/// Async client repository backed by SQLite.
pub struct SqlClientRepository {
    db: Arc<DbManager>,
}

impl SqlClientRepository {
    /// Construct a repository backed by the shared database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepositoryPort for SqlClientRepository {
    async fn find_by_id(&self, client_id: i64) -> DomainResult<Option<Client>> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<Option<Client>> {
            let conn = db.get_connection()?;
            let row = conn
                .query_row(
                    "SELECT id, name, email, type FROM clients WHERE id = ?1",
                    [client_id],
                    |row| {
                        Ok((
                            row.get::<_, i64>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            row.get::<_, String>(3)?,
                        ))
                    },
                )
                .optional()
                .map_err(map_sql_error)?;

            row.map(|(id, name, email, type_str)| {
                let client_type = ClientType::from_str(&type_str).map_err(|()| {
                    GymbookError::Database(format!("unknown client type in storage: {type_str}"))
                })?;
                Ok(Client { id, name, email, client_type })
            })
            .transpose()
        })
        .await
        .map_err(map_join_error)?
    }
}

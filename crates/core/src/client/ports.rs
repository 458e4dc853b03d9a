//! Port interface for client lookup

use async_trait::async_trait;
use gymbook_domain::{Client, Result};

/// Trait for loading clients.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>>;
}

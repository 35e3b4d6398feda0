use std::sync::Arc;

use write_model::{
    aggregate::Client,
    value_object::{PersonId, Version},
};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait ClientRepository {
    async fn delete(&self, id: PersonId) -> Result<(), Error>;
    async fn find(&self, id: PersonId) -> Result<Option<Client>, Error>;
    async fn store(&self, current: Option<Version>, client: &Client) -> Result<(), Error>;
}

pub trait HasClientRepository {
    fn client_repository(&self) -> Arc<dyn ClientRepository + Send + Sync>;
}

use std::sync::Arc;

use write_model::value_object::PersonId;

use super::PersonQueryData;

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait ClientReader {
    async fn get(
        &self,
        id: PersonId,
    ) -> Result<Option<PersonQueryData>, Box<dyn std::error::Error + Send + Sync>>;
    async fn list(&self) -> Result<Vec<PersonQueryData>, Box<dyn std::error::Error + Send + Sync>>;
}

pub trait HasClientReader {
    fn client_reader(&self) -> Arc<dyn ClientReader + Send + Sync>;
}

use std::{str::FromStr as _, sync::Arc};

use write_model::value_object::PersonId;

#[cfg(any(test, feature = "test-util"))]
use crate::port::ClientReader;
use crate::{port::HasClientReader, view::PersonView};

#[derive(Debug)]
pub struct Input {
    pub client_id: String,
}

#[derive(Debug)]
pub struct Output {
    pub client: PersonView,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("client get")]
    ClientGet(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("client id")]
    ClientId(#[source] write_model::value_object::person_id::Error),
    #[error("client not found (id = {0})")]
    ClientNotFound(PersonId),
}

#[async_trait::async_trait]
pub trait GetClient: HasClientReader {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, Input { client_id }: Input) -> Result<Output, Error> {
        let client_id = PersonId::from_str(&client_id).map_err(Error::ClientId)?;
        self.client_reader()
            .get(client_id)
            .await
            .map_err(Error::ClientGet)?
            .map(|client| Output {
                client: PersonView::from(client),
            })
            .ok_or(Error::ClientNotFound(client_id))
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub GetClient {}

    impl HasClientReader for GetClient {
        fn client_reader(&self) -> Arc<dyn ClientReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl GetClient for GetClient {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasGetClient {
    fn get_client(&self) -> Arc<dyn GetClient + Send + Sync>;
}

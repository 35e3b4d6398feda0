use std::sync::Arc;

#[cfg(any(test, feature = "test-util"))]
use crate::port::ClientReader;
use crate::{port::HasClientReader, view::PersonView};

#[derive(Debug)]
pub struct Input;

/// Ordered by ascending id.
#[derive(Debug)]
pub struct Output(pub Vec<PersonView>);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("client list")]
    ClientList(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait::async_trait]
pub trait ListClients: HasClientReader {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, _: Input) -> Result<Output, Error> {
        self.client_reader()
            .list()
            .await
            .map(|clients| Output(clients.into_iter().map(PersonView::from).collect()))
            .map_err(Error::ClientList)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub ListClients {}

    impl HasClientReader for ListClients {
        fn client_reader(&self) -> Arc<dyn ClientReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl ListClients for ListClients {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasListClients {
    fn list_clients(&self) -> Arc<dyn ListClients + Send + Sync>;
}

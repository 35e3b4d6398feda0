use std::{str::FromStr as _, sync::Arc};

use write_model::value_object::PersonId;

use crate::port::{
    client_repository, person_repository, ticket_repository, HasClientRepository,
    HasPersonRepository, HasTicketRepository,
};
#[cfg(any(test, feature = "test-util"))]
use crate::port::{ClientRepository, PersonRepository, TicketRepository};

#[derive(Debug)]
pub struct Input {
    pub client_id: String,
}

#[derive(Debug)]
pub struct Output;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("person delete")]
    PersonDelete(#[source] person_repository::Error),
    #[error("client delete")]
    ClientDelete(#[source] client_repository::Error),
    #[error("client find")]
    ClientFind(#[source] client_repository::Error),
    #[error("client has tickets (id = {0}, tickets = {1})")]
    ClientHasTickets(PersonId, usize),
    #[error("client id")]
    ClientId(#[source] write_model::value_object::person_id::Error),
    #[error("client not found (id = {0})")]
    ClientNotFound(PersonId),
    #[error("ticket count")]
    TicketCount(#[source] ticket_repository::Error),
}

#[async_trait::async_trait]
pub trait DeleteClient: HasPersonRepository + HasClientRepository + HasTicketRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let client_repository = self.client_repository();
        let client_id = PersonId::from_str(&input.client_id).map_err(Error::ClientId)?;
        let client = client_repository
            .find(client_id)
            .await
            .map_err(Error::ClientFind)?
            .ok_or(Error::ClientNotFound(client_id))?;

        let tickets = self
            .ticket_repository()
            .count_by_client(client.id())
            .await
            .map_err(Error::TicketCount)?;
        if tickets > 0 {
            return Err(Error::ClientHasTickets(client.id(), tickets));
        }

        client_repository
            .delete(client.id())
            .await
            .map_err(Error::ClientDelete)?;
        self.person_repository()
            .delete(client.id())
            .await
            .map_err(Error::PersonDelete)?;
        Ok(Output)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub DeleteClient {}

    impl HasPersonRepository for DeleteClient {
        fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync>;
    }

    impl HasClientRepository for DeleteClient {
        fn client_repository(&self) -> Arc<dyn ClientRepository + Send + Sync>;
    }

    impl HasTicketRepository for DeleteClient {
        fn ticket_repository(&self) -> Arc<dyn TicketRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl DeleteClient for DeleteClient {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasDeleteClient {
    fn delete_client(&self) -> Arc<dyn DeleteClient + Send + Sync>;
}

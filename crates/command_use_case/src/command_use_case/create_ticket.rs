use std::{str::FromStr as _, sync::Arc};

use write_model::{
    aggregate::Ticket,
    value_object::{PersonId, Priority, Status, Title},
};

use crate::port::{
    client_repository, technician_repository, ticket_repository, HasClientRepository,
    HasTechnicianRepository, HasTicketRepository,
};
#[cfg(any(test, feature = "test-util"))]
use crate::port::{ClientRepository, TechnicianRepository, TicketRepository};

/// `priority` defaults to `MEDIUM` and `status` defaults to `OPEN`.
#[derive(Debug)]
pub struct Input {
    pub client_id: String,
    pub observations: String,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub technician_id: String,
    pub title: String,
}

#[derive(Debug)]
pub struct Output {
    pub ticket: Ticket,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("client find")]
    ClientFind(#[source] client_repository::Error),
    #[error("client id")]
    ClientId(#[source] write_model::value_object::person_id::Error),
    #[error("client not found (id = {0})")]
    ClientNotFound(PersonId),
    #[error("priority")]
    Priority(#[source] write_model::value_object::priority::Error),
    #[error("status")]
    Status(#[source] write_model::value_object::status::Error),
    #[error("technician find")]
    TechnicianFind(#[source] technician_repository::Error),
    #[error("technician id")]
    TechnicianId(#[source] write_model::value_object::person_id::Error),
    #[error("technician not found (id = {0})")]
    TechnicianNotFound(PersonId),
    #[error("ticket next id")]
    TicketNextId(#[source] ticket_repository::Error),
    #[error("ticket store")]
    TicketStore(#[source] ticket_repository::Error),
    #[error("title")]
    Title(#[source] write_model::value_object::title::Error),
}

#[async_trait::async_trait]
pub trait CreateTicket: HasClientRepository + HasTechnicianRepository + HasTicketRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let technician_id =
            PersonId::from_str(&input.technician_id).map_err(Error::TechnicianId)?;
        let client_id = PersonId::from_str(&input.client_id).map_err(Error::ClientId)?;
        let priority = input
            .priority
            .as_deref()
            .map(Priority::from_str)
            .transpose()
            .map_err(Error::Priority)?
            .unwrap_or_default();
        let status = input
            .status
            .as_deref()
            .map(Status::from_str)
            .transpose()
            .map_err(Error::Status)?
            .unwrap_or_default();
        let title = Title::from_str(&input.title).map_err(Error::Title)?;

        let technician = self
            .technician_repository()
            .find(technician_id)
            .await
            .map_err(Error::TechnicianFind)?
            .ok_or(Error::TechnicianNotFound(technician_id))?;
        let client = self
            .client_repository()
            .find(client_id)
            .await
            .map_err(Error::ClientFind)?
            .ok_or(Error::ClientNotFound(client_id))?;

        let ticket_repository = self.ticket_repository();
        let id = ticket_repository
            .next_id()
            .await
            .map_err(Error::TicketNextId)?;
        let ticket = Ticket::create(
            id,
            technician.id(),
            client.id(),
            priority,
            status,
            title,
            input.observations,
        );
        ticket_repository
            .store(None, &ticket)
            .await
            .map_err(Error::TicketStore)?;
        Ok(Output { ticket })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub CreateTicket {}

    impl HasClientRepository for CreateTicket {
        fn client_repository(&self) -> Arc<dyn ClientRepository + Send + Sync>;
    }

    impl HasTechnicianRepository for CreateTicket {
        fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync>;
    }

    impl HasTicketRepository for CreateTicket {
        fn ticket_repository(&self) -> Arc<dyn TicketRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl CreateTicket for CreateTicket {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasCreateTicket {
    fn create_ticket(&self) -> Arc<dyn CreateTicket + Send + Sync>;
}

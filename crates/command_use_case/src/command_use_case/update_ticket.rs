use std::{str::FromStr as _, sync::Arc};

use write_model::{
    aggregate::{ticket::TicketUpdate, Ticket},
    value_object::{PersonId, Priority, Status, TicketId, Title},
};

use crate::port::{
    client_repository, technician_repository, ticket_repository, HasClientRepository,
    HasTechnicianRepository, HasTicketRepository,
};
#[cfg(any(test, feature = "test-util"))]
use crate::port::{ClientRepository, TechnicianRepository, TicketRepository};

/// Every field except `ticket_id` is optional. `None` keeps the stored value.
#[derive(Debug)]
pub struct Input {
    pub client_id: Option<String>,
    pub observations: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub technician_id: Option<String>,
    pub ticket_id: String,
    pub title: Option<String>,
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
    #[error("ticket find")]
    TicketFind(#[source] ticket_repository::Error),
    #[error("ticket id")]
    TicketId(#[source] write_model::value_object::ticket_id::Error),
    #[error("ticket not found (id = {0})")]
    TicketNotFound(TicketId),
    #[error("ticket store")]
    TicketStore(#[source] ticket_repository::Error),
    #[error("ticket update")]
    TicketUpdate(#[source] write_model::aggregate::ticket::Error),
    #[error("title")]
    Title(#[source] write_model::value_object::title::Error),
}

#[async_trait::async_trait]
pub trait UpdateTicket: HasClientRepository + HasTechnicianRepository + HasTicketRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let ticket_id = TicketId::from_str(&input.ticket_id).map_err(Error::TicketId)?;
        let technician_id = input
            .technician_id
            .as_deref()
            .map(PersonId::from_str)
            .transpose()
            .map_err(Error::TechnicianId)?;
        let client_id = input
            .client_id
            .as_deref()
            .map(PersonId::from_str)
            .transpose()
            .map_err(Error::ClientId)?;
        let priority = input
            .priority
            .as_deref()
            .map(Priority::from_str)
            .transpose()
            .map_err(Error::Priority)?;
        let status = input
            .status
            .as_deref()
            .map(Status::from_str)
            .transpose()
            .map_err(Error::Status)?;
        let title = input
            .title
            .as_deref()
            .map(Title::from_str)
            .transpose()
            .map_err(Error::Title)?;

        let ticket_repository = self.ticket_repository();
        let ticket = ticket_repository
            .find(ticket_id)
            .await
            .map_err(Error::TicketFind)?
            .ok_or(Error::TicketNotFound(ticket_id))?;

        if let Some(technician_id) = technician_id {
            self.technician_repository()
                .find(technician_id)
                .await
                .map_err(Error::TechnicianFind)?
                .ok_or(Error::TechnicianNotFound(technician_id))?;
        }
        if let Some(client_id) = client_id {
            self.client_repository()
                .find(client_id)
                .await
                .map_err(Error::ClientFind)?
                .ok_or(Error::ClientNotFound(client_id))?;
        }

        let updated = ticket
            .update(TicketUpdate {
                client_id,
                observations: input.observations,
                priority,
                status,
                technician_id,
                title,
            })
            .map_err(Error::TicketUpdate)?;
        ticket_repository
            .store(Some(ticket.version()), &updated)
            .await
            .map_err(Error::TicketStore)?;
        Ok(Output { ticket: updated })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub UpdateTicket {}

    impl HasClientRepository for UpdateTicket {
        fn client_repository(&self) -> Arc<dyn ClientRepository + Send + Sync>;
    }

    impl HasTechnicianRepository for UpdateTicket {
        fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync>;
    }

    impl HasTicketRepository for UpdateTicket {
        fn ticket_repository(&self) -> Arc<dyn TicketRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl UpdateTicket for UpdateTicket {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasUpdateTicket {
    fn update_ticket(&self) -> Arc<dyn UpdateTicket + Send + Sync>;
}

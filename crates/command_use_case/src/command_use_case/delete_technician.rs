use std::{str::FromStr as _, sync::Arc};

use write_model::value_object::PersonId;

use crate::port::{
    person_repository, technician_repository, ticket_repository, HasPersonRepository,
    HasTechnicianRepository, HasTicketRepository,
};
#[cfg(any(test, feature = "test-util"))]
use crate::port::{PersonRepository, TechnicianRepository, TicketRepository};

#[derive(Debug)]
pub struct Input {
    pub technician_id: String,
}

#[derive(Debug)]
pub struct Output;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("person delete")]
    PersonDelete(#[source] person_repository::Error),
    #[error("technician delete")]
    TechnicianDelete(#[source] technician_repository::Error),
    #[error("technician find")]
    TechnicianFind(#[source] technician_repository::Error),
    #[error("technician has tickets (id = {0}, tickets = {1})")]
    TechnicianHasTickets(PersonId, usize),
    #[error("technician id")]
    TechnicianId(#[source] write_model::value_object::person_id::Error),
    #[error("technician not found (id = {0})")]
    TechnicianNotFound(PersonId),
    #[error("ticket count")]
    TicketCount(#[source] ticket_repository::Error),
}

#[async_trait::async_trait]
pub trait DeleteTechnician: HasPersonRepository + HasTechnicianRepository + HasTicketRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let technician_repository = self.technician_repository();
        let technician_id =
            PersonId::from_str(&input.technician_id).map_err(Error::TechnicianId)?;
        let technician = technician_repository
            .find(technician_id)
            .await
            .map_err(Error::TechnicianFind)?
            .ok_or(Error::TechnicianNotFound(technician_id))?;

        let tickets = self
            .ticket_repository()
            .count_by_technician(technician.id())
            .await
            .map_err(Error::TicketCount)?;
        if tickets > 0 {
            return Err(Error::TechnicianHasTickets(technician.id(), tickets));
        }

        technician_repository
            .delete(technician.id())
            .await
            .map_err(Error::TechnicianDelete)?;
        self.person_repository()
            .delete(technician.id())
            .await
            .map_err(Error::PersonDelete)?;
        Ok(Output)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub DeleteTechnician {}

    impl HasPersonRepository for DeleteTechnician {
        fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync>;
    }

    impl HasTechnicianRepository for DeleteTechnician {
        fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync>;
    }

    impl HasTicketRepository for DeleteTechnician {
        fn ticket_repository(&self) -> Arc<dyn TicketRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl DeleteTechnician for DeleteTechnician {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasDeleteTechnician {
    fn delete_technician(&self) -> Arc<dyn DeleteTechnician + Send + Sync>;
}

use std::sync::Arc;

use write_model::{
    aggregate::Ticket,
    value_object::{PersonId, TicketId, Version},
};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait TicketRepository {
    async fn count_by_client(&self, client_id: PersonId) -> Result<usize, Error>;
    async fn count_by_technician(&self, technician_id: PersonId) -> Result<usize, Error>;
    async fn find(&self, id: TicketId) -> Result<Option<Ticket>, Error>;
    async fn next_id(&self) -> Result<TicketId, Error>;
    async fn store(&self, current: Option<Version>, ticket: &Ticket) -> Result<(), Error>;
}

pub trait HasTicketRepository {
    fn ticket_repository(&self) -> Arc<dyn TicketRepository + Send + Sync>;
}

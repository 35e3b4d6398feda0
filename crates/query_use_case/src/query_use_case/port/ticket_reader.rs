use std::sync::Arc;

use write_model::value_object::{DateTime, Name, PersonId, Priority, Status, TicketId, Version};

/// Read model of a ticket with the names of both parties resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketQueryData {
    pub client_id: PersonId,
    pub client_name: Name,
    pub closed_at: Option<DateTime>,
    pub id: TicketId,
    pub observations: String,
    pub opened_at: DateTime,
    pub priority: Priority,
    pub status: Status,
    pub technician_id: PersonId,
    pub technician_name: Name,
    pub title: String,
    pub version: Version,
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait TicketReader {
    async fn get(
        &self,
        id: TicketId,
    ) -> Result<Option<TicketQueryData>, Box<dyn std::error::Error + Send + Sync>>;
    async fn list(&self) -> Result<Vec<TicketQueryData>, Box<dyn std::error::Error + Send + Sync>>;
}

pub trait HasTicketReader {
    fn ticket_reader(&self) -> Arc<dyn TicketReader + Send + Sync>;
}

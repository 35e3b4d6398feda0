use std::{collections::BTreeMap, sync::Arc};

use command_use_case::port::ticket_repository;
use query_use_case::port::TicketQueryData;
use tokio::sync::Mutex;
use write_model::{
    aggregate::Ticket,
    value_object::{PersonId, TicketId, Version},
};

use super::{Error, InMemoryPersonStore};

/// Tickets keyed by id. The read side resolves technician and client names
/// through the person store.
pub struct InMemoryTicketStore {
    data: Arc<Mutex<BTreeMap<TicketId, Ticket>>>,
    last_id: Arc<Mutex<Option<TicketId>>>,
    person_store: Arc<InMemoryPersonStore>,
}

impl InMemoryTicketStore {
    pub fn new(person_store: Arc<InMemoryPersonStore>) -> Self {
        Self {
            data: Arc::new(Mutex::new(BTreeMap::new())),
            last_id: Arc::new(Mutex::new(None)),
            person_store,
        }
    }

    async fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Ticket) -> bool + Send,
    {
        let data = self.data.lock().await;
        data.values().filter(|ticket| predicate(ticket)).count()
    }

    async fn next_id_impl(&self) -> Result<TicketId, Box<dyn std::error::Error + Send + Sync>> {
        let mut last_id = self.last_id.lock().await;
        let id = match *last_id {
            None => TicketId::first(),
            Some(id) => id.next()?,
        };
        *last_id = Some(id);
        Ok(id)
    }

    async fn store_impl(
        &self,
        current: Option<Version>,
        ticket: &Ticket,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut data = self.data.lock().await;
        let id = ticket.id();
        match (current, data.get(&id)) {
            (None, None) => {}
            (None, Some(_)) => return Err(Error::AlreadyExists(format!("ticket {}", id)).into()),
            (Some(_), None) => return Err(Error::NotFound(format!("ticket {}", id)).into()),
            (Some(expected), Some(stored)) => {
                if stored.version() != expected {
                    return Err(Error::VersionMismatch {
                        actual: stored.version(),
                        expected,
                    }
                    .into());
                }
            }
        }
        data.insert(id, ticket.clone());
        Ok(())
    }

    async fn to_query_data(
        &self,
        ticket: Ticket,
    ) -> Result<TicketQueryData, Box<dyn std::error::Error + Send + Sync>> {
        let technician_name = self
            .person_store
            .find_name(ticket.technician_id())
            .await
            .ok_or_else(|| Error::NotFound(format!("person {}", ticket.technician_id())))?;
        let client_name = self
            .person_store
            .find_name(ticket.client_id())
            .await
            .ok_or_else(|| Error::NotFound(format!("person {}", ticket.client_id())))?;
        Ok(TicketQueryData {
            client_id: ticket.client_id(),
            client_name,
            closed_at: ticket.closed_at(),
            id: ticket.id(),
            observations: ticket.observations().to_owned(),
            opened_at: ticket.opened_at(),
            priority: ticket.priority(),
            status: ticket.status(),
            technician_id: ticket.technician_id(),
            technician_name,
            title: ticket.title().to_string(),
            version: ticket.version(),
        })
    }
}

#[async_trait::async_trait]
impl query_use_case::port::TicketReader for InMemoryTicketStore {
    async fn get(
        &self,
        id: TicketId,
    ) -> Result<Option<TicketQueryData>, Box<dyn std::error::Error + Send + Sync>> {
        let ticket = {
            let data = self.data.lock().await;
            data.get(&id).cloned()
        };
        match ticket {
            None => Ok(None),
            Some(ticket) => self.to_query_data(ticket).await.map(Some),
        }
    }

    async fn list(&self) -> Result<Vec<TicketQueryData>, Box<dyn std::error::Error + Send + Sync>> {
        let tickets = {
            let data = self.data.lock().await;
            data.values().cloned().collect::<Vec<Ticket>>()
        };
        let mut query_data = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            query_data.push(self.to_query_data(ticket).await?);
        }
        Ok(query_data)
    }
}

#[async_trait::async_trait]
impl command_use_case::port::TicketRepository for InMemoryTicketStore {
    async fn count_by_client(&self, client_id: PersonId) -> Result<usize, ticket_repository::Error> {
        Ok(self
            .count_where(|ticket| ticket.client_id() == client_id)
            .await)
    }

    async fn count_by_technician(
        &self,
        technician_id: PersonId,
    ) -> Result<usize, ticket_repository::Error> {
        Ok(self
            .count_where(|ticket| ticket.technician_id() == technician_id)
            .await)
    }

    async fn find(&self, id: TicketId) -> Result<Option<Ticket>, ticket_repository::Error> {
        let data = self.data.lock().await;
        Ok(data.get(&id).cloned())
    }

    async fn next_id(&self) -> Result<TicketId, ticket_repository::Error> {
        self.next_id_impl()
            .await
            .map_err(ticket_repository::Error::from)
    }

    async fn store(
        &self,
        current: Option<Version>,
        ticket: &Ticket,
    ) -> Result<(), ticket_repository::Error> {
        self.store_impl(current, ticket)
            .await
            .map_err(ticket_repository::Error::from)
    }
}

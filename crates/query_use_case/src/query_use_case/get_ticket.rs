use std::{str::FromStr as _, sync::Arc};

use write_model::value_object::TicketId;

#[cfg(any(test, feature = "test-util"))]
use crate::port::TicketReader;
use crate::{port::HasTicketReader, view::TicketView};

#[derive(Debug)]
pub struct Input {
    pub ticket_id: String,
}

#[derive(Debug)]
pub struct Output {
    pub ticket: TicketView,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket get")]
    TicketGet(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("ticket id")]
    TicketId(#[source] write_model::value_object::ticket_id::Error),
    #[error("ticket not found (id = {0})")]
    TicketNotFound(TicketId),
}

#[async_trait::async_trait]
pub trait GetTicket: HasTicketReader {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, Input { ticket_id }: Input) -> Result<Output, Error> {
        let ticket_id = TicketId::from_str(&ticket_id).map_err(Error::TicketId)?;
        self.ticket_reader()
            .get(ticket_id)
            .await
            .map_err(Error::TicketGet)?
            .map(|ticket| Output {
                ticket: TicketView::from(ticket),
            })
            .ok_or(Error::TicketNotFound(ticket_id))
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub GetTicket {}

    impl HasTicketReader for GetTicket {
        fn ticket_reader(&self) -> Arc<dyn TicketReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl GetTicket for GetTicket {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasGetTicket {
    fn get_ticket(&self) -> Arc<dyn GetTicket + Send + Sync>;
}

use std::sync::Arc;

#[cfg(any(test, feature = "test-util"))]
use crate::port::TicketReader;
use crate::{port::HasTicketReader, view::TicketView};

#[derive(Debug)]
pub struct Input;

/// Ordered by ascending id.
#[derive(Debug)]
pub struct Output(pub Vec<TicketView>);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket list")]
    TicketList(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait::async_trait]
pub trait ListTickets: HasTicketReader {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, _: Input) -> Result<Output, Error> {
        self.ticket_reader()
            .list()
            .await
            .map(|tickets| Output(tickets.into_iter().map(TicketView::from).collect()))
            .map_err(Error::TicketList)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub ListTickets {}

    impl HasTicketReader for ListTickets {
        fn ticket_reader(&self) -> Arc<dyn TicketReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl ListTickets for ListTickets {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasListTickets {
    fn list_tickets(&self) -> Arc<dyn ListTickets + Send + Sync>;
}

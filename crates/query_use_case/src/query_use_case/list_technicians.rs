use std::sync::Arc;

#[cfg(any(test, feature = "test-util"))]
use crate::port::TechnicianReader;
use crate::{port::HasTechnicianReader, view::PersonView};

#[derive(Debug)]
pub struct Input;

/// Ordered by ascending id.
#[derive(Debug)]
pub struct Output(pub Vec<PersonView>);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("technician list")]
    TechnicianList(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait::async_trait]
pub trait ListTechnicians: HasTechnicianReader {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, _: Input) -> Result<Output, Error> {
        self.technician_reader()
            .list()
            .await
            .map(|technicians| Output(technicians.into_iter().map(PersonView::from).collect()))
            .map_err(Error::TechnicianList)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub ListTechnicians {}

    impl HasTechnicianReader for ListTechnicians {
        fn technician_reader(&self) -> Arc<dyn TechnicianReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl ListTechnicians for ListTechnicians {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasListTechnicians {
    fn list_technicians(&self) -> Arc<dyn ListTechnicians + Send + Sync>;
}

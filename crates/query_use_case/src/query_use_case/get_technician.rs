use std::{str::FromStr as _, sync::Arc};

use write_model::value_object::PersonId;

#[cfg(any(test, feature = "test-util"))]
use crate::port::TechnicianReader;
use crate::{port::HasTechnicianReader, view::PersonView};

#[derive(Debug)]
pub struct Input {
    pub technician_id: String,
}

#[derive(Debug)]
pub struct Output {
    pub technician: PersonView,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("technician get")]
    TechnicianGet(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("technician id")]
    TechnicianId(#[source] write_model::value_object::person_id::Error),
    #[error("technician not found (id = {0})")]
    TechnicianNotFound(PersonId),
}

#[async_trait::async_trait]
pub trait GetTechnician: HasTechnicianReader {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, Input { technician_id }: Input) -> Result<Output, Error> {
        let technician_id = PersonId::from_str(&technician_id).map_err(Error::TechnicianId)?;
        self.technician_reader()
            .get(technician_id)
            .await
            .map_err(Error::TechnicianGet)?
            .map(|technician| Output {
                technician: PersonView::from(technician),
            })
            .ok_or(Error::TechnicianNotFound(technician_id))
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub GetTechnician {}

    impl HasTechnicianReader for GetTechnician {
        fn technician_reader(&self) -> Arc<dyn TechnicianReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl GetTechnician for GetTechnician {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasGetTechnician {
    fn get_technician(&self) -> Arc<dyn GetTechnician + Send + Sync>;
}

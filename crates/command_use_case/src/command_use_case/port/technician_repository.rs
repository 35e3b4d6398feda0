use std::sync::Arc;

use write_model::{
    aggregate::Technician,
    value_object::{PersonId, Version},
};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait TechnicianRepository {
    async fn delete(&self, id: PersonId) -> Result<(), Error>;
    async fn find(&self, id: PersonId) -> Result<Option<Technician>, Error>;
    /// `current` is `None` for an insert, or the version the update was based on.
    async fn store(&self, current: Option<Version>, technician: &Technician)
        -> Result<(), Error>;
}

pub trait HasTechnicianRepository {
    fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync>;
}

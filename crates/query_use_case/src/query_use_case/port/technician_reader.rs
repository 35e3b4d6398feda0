use std::{collections::BTreeSet, sync::Arc};

use write_model::value_object::{DateTime, Email, Name, NationalId, PersonId, Profile, Version};

/// Read model shared by technicians and clients. The password digest is not
/// part of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PersonQueryData {
    pub created_at: DateTime,
    pub email: Email,
    pub id: PersonId,
    pub name: Name,
    pub national_id: NationalId,
    pub profiles: BTreeSet<Profile>,
    pub version: Version,
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait TechnicianReader {
    async fn get(
        &self,
        id: PersonId,
    ) -> Result<Option<PersonQueryData>, Box<dyn std::error::Error + Send + Sync>>;
    async fn list(&self) -> Result<Vec<PersonQueryData>, Box<dyn std::error::Error + Send + Sync>>;
}

pub trait HasTechnicianReader {
    fn technician_reader(&self) -> Arc<dyn TechnicianReader + Send + Sync>;
}

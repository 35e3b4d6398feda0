use std::{collections::BTreeMap, sync::Arc};

use command_use_case::port::technician_repository;
use query_use_case::port::PersonQueryData;
use tokio::sync::Mutex;
use write_model::{
    aggregate::Technician,
    value_object::{PersonId, Version},
};

use super::Error;

pub struct InMemoryTechnicianStore {
    data: Arc<Mutex<BTreeMap<PersonId, Technician>>>,
}

impl InMemoryTechnicianStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    async fn delete_impl(
        &self,
        id: PersonId,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut data = self.data.lock().await;
        data.remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("technician {}", id)).into())
    }

    async fn store_impl(
        &self,
        current: Option<Version>,
        technician: &Technician,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut data = self.data.lock().await;
        let id = technician.id();
        match (current, data.get(&id)) {
            (None, None) => {}
            (None, Some(_)) => {
                return Err(Error::AlreadyExists(format!("technician {}", id)).into())
            }
            (Some(_), None) => return Err(Error::NotFound(format!("technician {}", id)).into()),
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
        data.insert(id, technician.clone());
        Ok(())
    }
}

fn to_query_data(technician: &Technician) -> PersonQueryData {
    let person = technician.person();
    PersonQueryData {
        created_at: person.created_at(),
        email: person.email().clone(),
        id: person.id(),
        name: person.name().clone(),
        national_id: person.national_id().clone(),
        profiles: person.profiles().clone(),
        version: technician.version(),
    }
}

#[async_trait::async_trait]
impl query_use_case::port::TechnicianReader for InMemoryTechnicianStore {
    async fn get(
        &self,
        id: PersonId,
    ) -> Result<Option<PersonQueryData>, Box<dyn std::error::Error + Send + Sync>> {
        let data = self.data.lock().await;
        Ok(data.get(&id).map(to_query_data))
    }

    async fn list(&self) -> Result<Vec<PersonQueryData>, Box<dyn std::error::Error + Send + Sync>> {
        let data = self.data.lock().await;
        Ok(data.values().map(to_query_data).collect())
    }
}

#[async_trait::async_trait]
impl command_use_case::port::TechnicianRepository for InMemoryTechnicianStore {
    async fn delete(&self, id: PersonId) -> Result<(), technician_repository::Error> {
        self.delete_impl(id)
            .await
            .map_err(technician_repository::Error::from)
    }

    async fn find(&self, id: PersonId) -> Result<Option<Technician>, technician_repository::Error> {
        let data = self.data.lock().await;
        Ok(data.get(&id).cloned())
    }

    async fn store(
        &self,
        current: Option<Version>,
        technician: &Technician,
    ) -> Result<(), technician_repository::Error> {
        self.store_impl(current, technician)
            .await
            .map_err(technician_repository::Error::from)
    }
}

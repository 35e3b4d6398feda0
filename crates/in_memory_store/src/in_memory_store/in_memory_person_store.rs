use std::{collections::BTreeMap, sync::Arc};

use command_use_case::port::person_repository;
use tokio::sync::Mutex;
use write_model::{
    aggregate::Person,
    value_object::{Email, Name, NationalId, PersonId},
};

use super::Error;

/// Identity records of every technician and client. Ids are shared by both
/// kinds.
pub struct InMemoryPersonStore {
    data: Arc<Mutex<BTreeMap<PersonId, Person>>>,
    last_id: Arc<Mutex<Option<PersonId>>>,
}

impl InMemoryPersonStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(BTreeMap::new())),
            last_id: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) async fn find_name(&self, id: PersonId) -> Option<Name> {
        let data = self.data.lock().await;
        data.get(&id).map(|person| person.name().clone())
    }

    async fn delete_impl(
        &self,
        id: PersonId,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut data = self.data.lock().await;
        data.remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("person {}", id)).into())
    }

    async fn find_where<F>(&self, predicate: F) -> Option<Person>
    where
        F: Fn(&Person) -> bool + Send,
    {
        let data = self.data.lock().await;
        data.values().find(|person| predicate(person)).cloned()
    }

    async fn next_id_impl(&self) -> Result<PersonId, Box<dyn std::error::Error + Send + Sync>> {
        let mut last_id = self.last_id.lock().await;
        let id = match *last_id {
            None => PersonId::first(),
            Some(id) => id.next()?,
        };
        *last_id = Some(id);
        Ok(id)
    }
}

#[async_trait::async_trait]
impl command_use_case::port::PersonRepository for InMemoryPersonStore {
    async fn delete(&self, id: PersonId) -> Result<(), person_repository::Error> {
        self.delete_impl(id)
            .await
            .map_err(person_repository::Error::from)
    }

    async fn find(&self, id: PersonId) -> Result<Option<Person>, person_repository::Error> {
        let data = self.data.lock().await;
        Ok(data.get(&id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Person>, person_repository::Error> {
        Ok(self.find_where(|person| person.email() == email).await)
    }

    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<Person>, person_repository::Error> {
        Ok(self
            .find_where(|person| person.national_id() == national_id)
            .await)
    }

    async fn next_id(&self) -> Result<PersonId, person_repository::Error> {
        self.next_id_impl()
            .await
            .map_err(person_repository::Error::from)
    }

    async fn store(&self, person: &Person) -> Result<(), person_repository::Error> {
        let mut data = self.data.lock().await;
        data.insert(person.id(), person.clone());
        Ok(())
    }
}

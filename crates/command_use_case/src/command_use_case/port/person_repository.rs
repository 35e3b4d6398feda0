use std::sync::Arc;

use write_model::{
    aggregate::Person,
    value_object::{Email, NationalId, PersonId},
};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

/// Identity records of every technician and client, in one id and
/// uniqueness namespace.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait PersonRepository {
    async fn delete(&self, id: PersonId) -> Result<(), Error>;
    async fn find(&self, id: PersonId) -> Result<Option<Person>, Error>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<Person>, Error>;
    async fn find_by_national_id(&self, national_id: &NationalId)
        -> Result<Option<Person>, Error>;
    async fn next_id(&self) -> Result<PersonId, Error>;
    async fn store(&self, person: &Person) -> Result<(), Error>;
}

pub trait HasPersonRepository {
    fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync>;
}

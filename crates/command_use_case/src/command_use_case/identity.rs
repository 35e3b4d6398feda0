use std::{collections::BTreeSet, str::FromStr as _};

use write_model::value_object::{profile, Email, NationalId, PersonId, Profile};

use crate::port::{person_repository, PersonRepository};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("email already registered ({0})")]
    EmailAlreadyRegistered(Email),
    #[error("national id already registered ({0})")]
    NationalIdAlreadyRegistered(NationalId),
    #[error("person find")]
    PersonFind(#[source] person_repository::Error),
}

/// Fails when `national_id` or `email` belongs to a person other than `owner`.
///
/// Technicians and clients share the namespace, so a client's email blocks a
/// technician from using it too. The check and the later insert are separate
/// store calls and are not atomic.
pub async fn ensure_available(
    person_repository: &(dyn PersonRepository + Send + Sync),
    national_id: &NationalId,
    email: &Email,
    owner: Option<PersonId>,
) -> Result<(), Error> {
    let is_other = |id: PersonId| Some(id) != owner;
    if let Some(person) = person_repository
        .find_by_national_id(national_id)
        .await
        .map_err(Error::PersonFind)?
    {
        if is_other(person.id()) {
            return Err(Error::NationalIdAlreadyRegistered(national_id.clone()));
        }
    }
    if let Some(person) = person_repository
        .find_by_email(email)
        .await
        .map_err(Error::PersonFind)?
    {
        if is_other(person.id()) {
            return Err(Error::EmailAlreadyRegistered(email.clone()));
        }
    }
    Ok(())
}

pub fn parse_profiles(values: &[String]) -> Result<BTreeSet<Profile>, profile::Error> {
    values.iter().map(|value| Profile::from_str(value)).collect()
}

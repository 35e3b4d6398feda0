use std::{str::FromStr as _, sync::Arc};

use write_model::{
    aggregate::{person::PersonUpdate, Client},
    value_object::{Email, Name, NationalId, PersonId},
};

use crate::{
    identity,
    port::{
        client_repository, password_hasher, person_repository, HasClientRepository,
        HasPasswordHasher, HasPersonRepository,
    },
};
#[cfg(any(test, feature = "test-util"))]
use crate::port::{ClientRepository, PasswordHasher, PersonRepository};

/// `password` set to `None` or `""` keeps the stored digest. `profiles` set to
/// `None` keeps the stored profiles.
pub struct Input {
    pub email: String,
    pub name: String,
    pub national_id: String,
    pub password: Option<String>,
    pub profiles: Option<Vec<String>>,
    pub client_id: String,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("national_id", &self.national_id)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("profiles", &self.profiles)
            .field("client_id", &self.client_id)
            .finish()
    }
}

#[derive(Debug)]
pub struct Output {
    pub client: Client,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("email")]
    Email(#[source] write_model::value_object::email::Error),
    #[error("email already registered ({0})")]
    EmailAlreadyRegistered(Email),
    #[error("name")]
    Name(#[source] write_model::value_object::name::Error),
    #[error("national id")]
    NationalId(#[source] write_model::value_object::national_id::Error),
    #[error("national id already registered ({0})")]
    NationalIdAlreadyRegistered(NationalId),
    #[error("password hash")]
    PasswordHash(#[source] password_hasher::Error),
    #[error("person find")]
    PersonFind(#[source] person_repository::Error),
    #[error("person store")]
    PersonStore(#[source] person_repository::Error),
    #[error("profile")]
    Profile(#[source] write_model::value_object::profile::Error),
    #[error("client find")]
    ClientFind(#[source] client_repository::Error),
    #[error("client id")]
    ClientId(#[source] write_model::value_object::person_id::Error),
    #[error("client not found (id = {0})")]
    ClientNotFound(PersonId),
    #[error("client store")]
    ClientStore(#[source] client_repository::Error),
    #[error("client update")]
    ClientUpdate(#[source] write_model::aggregate::client::Error),
}

impl From<identity::Error> for Error {
    fn from(e: identity::Error) -> Self {
        match e {
            identity::Error::EmailAlreadyRegistered(email) => Self::EmailAlreadyRegistered(email),
            identity::Error::NationalIdAlreadyRegistered(national_id) => {
                Self::NationalIdAlreadyRegistered(national_id)
            }
            identity::Error::PersonFind(e) => Self::PersonFind(e),
        }
    }
}

#[async_trait::async_trait]
pub trait UpdateClient: HasPasswordHasher + HasPersonRepository + HasClientRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let person_repository = self.person_repository();
        let client_repository = self.client_repository();

        let client_id = PersonId::from_str(&input.client_id).map_err(Error::ClientId)?;
        let name = Name::from_str(&input.name).map_err(Error::Name)?;
        let national_id = NationalId::from_str(&input.national_id).map_err(Error::NationalId)?;
        let email = Email::from_str(&input.email).map_err(Error::Email)?;
        let profiles = input
            .profiles
            .as_deref()
            .map(identity::parse_profiles)
            .transpose()
            .map_err(Error::Profile)?;

        let client = client_repository
            .find(client_id)
            .await
            .map_err(Error::ClientFind)?
            .ok_or(Error::ClientNotFound(client_id))?;

        identity::ensure_available(
            person_repository.as_ref(),
            &national_id,
            &email,
            Some(client_id),
        )
        .await?;

        let password_digest = match input.password.as_deref() {
            None | Some("") => None,
            Some(password) => Some(
                self.password_hasher()
                    .hash(password)
                    .map_err(Error::PasswordHash)?,
            ),
        };
        let updated = client
            .update(PersonUpdate {
                email,
                name,
                national_id,
                password_digest,
                profiles,
            })
            .map_err(Error::ClientUpdate)?;

        // a version mismatch must fail before the person record is written
        client_repository
            .store(Some(client.version()), &updated)
            .await
            .map_err(Error::ClientStore)?;
        person_repository
            .store(updated.person())
            .await
            .map_err(Error::PersonStore)?;
        Ok(Output { client: updated })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub UpdateClient {}

    impl HasPasswordHasher for UpdateClient {
        fn password_hasher(&self) -> Arc<dyn PasswordHasher + Send + Sync>;
    }

    impl HasPersonRepository for UpdateClient {
        fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync>;
    }

    impl HasClientRepository for UpdateClient {
        fn client_repository(&self) -> Arc<dyn ClientRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl UpdateClient for UpdateClient {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasUpdateClient {
    fn update_client(&self) -> Arc<dyn UpdateClient + Send + Sync>;
}

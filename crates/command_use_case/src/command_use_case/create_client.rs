use std::{str::FromStr as _, sync::Arc};

use write_model::{
    aggregate::Client,
    value_object::{Email, Name, NationalId},
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

pub struct Input {
    pub email: String,
    pub name: String,
    pub national_id: String,
    pub password: String,
    pub profiles: Vec<String>,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("national_id", &self.national_id)
            .field("password", &"<redacted>")
            .field("profiles", &self.profiles)
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
    #[error("password empty")]
    PasswordEmpty,
    #[error("password hash")]
    PasswordHash(#[source] password_hasher::Error),
    #[error("person find")]
    PersonFind(#[source] person_repository::Error),
    #[error("person next id")]
    PersonNextId(#[source] person_repository::Error),
    #[error("person store")]
    PersonStore(#[source] person_repository::Error),
    #[error("profile")]
    Profile(#[source] write_model::value_object::profile::Error),
    #[error("client store")]
    ClientStore(#[source] client_repository::Error),
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
pub trait CreateClient: HasPasswordHasher + HasPersonRepository + HasClientRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let person_repository = self.person_repository();
        let client_repository = self.client_repository();

        let name = Name::from_str(&input.name).map_err(Error::Name)?;
        let national_id = NationalId::from_str(&input.national_id).map_err(Error::NationalId)?;
        let email = Email::from_str(&input.email).map_err(Error::Email)?;
        let profiles = identity::parse_profiles(&input.profiles).map_err(Error::Profile)?;
        if input.password.is_empty() {
            return Err(Error::PasswordEmpty);
        }

        identity::ensure_available(person_repository.as_ref(), &national_id, &email, None).await?;

        let password_digest = self
            .password_hasher()
            .hash(&input.password)
            .map_err(Error::PasswordHash)?;
        let id = person_repository
            .next_id()
            .await
            .map_err(Error::PersonNextId)?;
        let client = Client::create(id, name, national_id, email, password_digest, profiles);

        person_repository
            .store(client.person())
            .await
            .map_err(Error::PersonStore)?;
        client_repository
            .store(None, &client)
            .await
            .map_err(Error::ClientStore)?;
        Ok(Output { client })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub CreateClient {}

    impl HasPasswordHasher for CreateClient {
        fn password_hasher(&self) -> Arc<dyn PasswordHasher + Send + Sync>;
    }

    impl HasPersonRepository for CreateClient {
        fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync>;
    }

    impl HasClientRepository for CreateClient {
        fn client_repository(&self) -> Arc<dyn ClientRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl CreateClient for CreateClient {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasCreateClient {
    fn create_client(&self) -> Arc<dyn CreateClient + Send + Sync>;
}

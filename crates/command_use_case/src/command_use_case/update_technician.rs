use std::{str::FromStr as _, sync::Arc};

use write_model::{
    aggregate::{person::PersonUpdate, Technician},
    value_object::{Email, Name, NationalId, PersonId},
};

use crate::{
    identity,
    port::{
        password_hasher, person_repository, technician_repository, HasPasswordHasher,
        HasPersonRepository, HasTechnicianRepository,
    },
};
#[cfg(any(test, feature = "test-util"))]
use crate::port::{PasswordHasher, PersonRepository, TechnicianRepository};

/// `password` set to `None` or `""` keeps the stored digest. `profiles` set to
/// `None` keeps the stored profiles.
pub struct Input {
    pub email: String,
    pub name: String,
    pub national_id: String,
    pub password: Option<String>,
    pub profiles: Option<Vec<String>>,
    pub technician_id: String,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("national_id", &self.national_id)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("profiles", &self.profiles)
            .field("technician_id", &self.technician_id)
            .finish()
    }
}

#[derive(Debug)]
pub struct Output {
    pub technician: Technician,
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
    #[error("technician find")]
    TechnicianFind(#[source] technician_repository::Error),
    #[error("technician id")]
    TechnicianId(#[source] write_model::value_object::person_id::Error),
    #[error("technician not found (id = {0})")]
    TechnicianNotFound(PersonId),
    #[error("technician store")]
    TechnicianStore(#[source] technician_repository::Error),
    #[error("technician update")]
    TechnicianUpdate(#[source] write_model::aggregate::technician::Error),
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
pub trait UpdateTechnician: HasPasswordHasher + HasPersonRepository + HasTechnicianRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let person_repository = self.person_repository();
        let technician_repository = self.technician_repository();

        let technician_id =
            PersonId::from_str(&input.technician_id).map_err(Error::TechnicianId)?;
        let name = Name::from_str(&input.name).map_err(Error::Name)?;
        let national_id = NationalId::from_str(&input.national_id).map_err(Error::NationalId)?;
        let email = Email::from_str(&input.email).map_err(Error::Email)?;
        let profiles = input
            .profiles
            .as_deref()
            .map(identity::parse_profiles)
            .transpose()
            .map_err(Error::Profile)?;

        let technician = technician_repository
            .find(technician_id)
            .await
            .map_err(Error::TechnicianFind)?
            .ok_or(Error::TechnicianNotFound(technician_id))?;

        identity::ensure_available(
            person_repository.as_ref(),
            &national_id,
            &email,
            Some(technician_id),
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
        let updated = technician
            .update(PersonUpdate {
                email,
                name,
                national_id,
                password_digest,
                profiles,
            })
            .map_err(Error::TechnicianUpdate)?;

        // a version mismatch must fail before the person record is written
        technician_repository
            .store(Some(technician.version()), &updated)
            .await
            .map_err(Error::TechnicianStore)?;
        person_repository
            .store(updated.person())
            .await
            .map_err(Error::PersonStore)?;
        Ok(Output {
            technician: updated,
        })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub UpdateTechnician {}

    impl HasPasswordHasher for UpdateTechnician {
        fn password_hasher(&self) -> Arc<dyn PasswordHasher + Send + Sync>;
    }

    impl HasPersonRepository for UpdateTechnician {
        fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync>;
    }

    impl HasTechnicianRepository for UpdateTechnician {
        fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl UpdateTechnician for UpdateTechnician {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasUpdateTechnician {
    fn update_technician(&self) -> Arc<dyn UpdateTechnician + Send + Sync>;
}

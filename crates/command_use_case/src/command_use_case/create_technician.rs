use std::{str::FromStr as _, sync::Arc};

use write_model::{
    aggregate::Technician,
    value_object::{Email, Name, NationalId},
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
    #[error("technician store")]
    TechnicianStore(#[source] technician_repository::Error),
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
pub trait CreateTechnician: HasPasswordHasher + HasPersonRepository + HasTechnicianRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let person_repository = self.person_repository();
        let technician_repository = self.technician_repository();

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
        let technician =
            Technician::create(id, name, national_id, email, password_digest, profiles);

        person_repository
            .store(technician.person())
            .await
            .map_err(Error::PersonStore)?;
        technician_repository
            .store(None, &technician)
            .await
            .map_err(Error::TechnicianStore)?;
        Ok(Output { technician })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub CreateTechnician {}

    impl HasPasswordHasher for CreateTechnician {
        fn password_hasher(&self) -> Arc<dyn PasswordHasher + Send + Sync>;
    }

    impl HasPersonRepository for CreateTechnician {
        fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync>;
    }

    impl HasTechnicianRepository for CreateTechnician {
        fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl CreateTechnician for CreateTechnician {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasCreateTechnician {
    fn create_technician(&self) -> Arc<dyn CreateTechnician + Send + Sync>;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use write_model::value_object::{PasswordDigest, PersonId, Profile};

    use crate::test_util::{build_client, Mocks, TestPorts};

    use super::*;

    impl CreateTechnician for TestPorts {}

    fn build_input() -> Input {
        Input {
            email: "a@x.com".to_owned(),
            name: "Valdir Cezar".to_owned(),
            national_id: "111".to_owned(),
            password: "123".to_owned(),
            profiles: vec!["ADMIN".to_owned()],
        }
    }

    #[test]
    fn test_mock() {
        let mut mock = MockCreateTechnician::new();
        mock.expect_execute()
            .return_once(|_| Err(Error::PasswordEmpty));
    }

    #[test]
    fn test_input_debug_redacts_password() {
        let debug = format!("{:?}", build_input());
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("\"123\""));
    }

    #[tokio::test]
    async fn test_happy_path() -> anyhow::Result<()> {
        let mut mocks = Mocks::default();
        mocks
            .person_repository
            .expect_find_by_national_id()
            .return_once(|_| Ok(None));
        mocks
            .person_repository
            .expect_find_by_email()
            .return_once(|_| Ok(None));
        mocks
            .person_repository
            .expect_next_id()
            .return_once(|| Ok(PersonId::from(1)));
        mocks
            .person_repository
            .expect_store()
            .withf(|person| person.id() == PersonId::from(1))
            .times(1)
            .return_once(|_| Ok(()));
        mocks
            .password_hasher
            .expect_hash()
            .withf(|plaintext| plaintext == "123")
            .return_once(|_| Ok(PasswordDigest::new("hashed".to_owned())));
        mocks
            .technician_repository
            .expect_store()
            .withf(|current, technician| {
                current.is_none() && technician.id() == PersonId::from(1)
            })
            .times(1)
            .return_once(|_, _| Ok(()));
        let ports = mocks.into_ports();

        let Output { technician } = ports.execute(build_input()).await?;
        assert_eq!(technician.id(), PersonId::from(1));
        assert_eq!(technician.person().national_id().as_str(), "111");
        assert_eq!(technician.person().email().as_str(), "a@x.com");
        assert_eq!(technician.person().password_digest().as_str(), "hashed");
        assert_eq!(
            technician.person().profiles(),
            &BTreeSet::from([Profile::Admin, Profile::Technician])
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_national_id_used_by_client() -> anyhow::Result<()> {
        let client = build_client(5, "111", "other@x.com")?;
        let mut mocks = Mocks::default();
        mocks
            .person_repository
            .expect_find_by_national_id()
            .return_once(move |_| Ok(Some(client.person().clone())));
        let ports = mocks.into_ports();

        let result = ports.execute(build_input()).await;
        assert!(matches!(result, Err(Error::NationalIdAlreadyRegistered(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_email_used_by_client() -> anyhow::Result<()> {
        let client = build_client(5, "222", "a@x.com")?;
        let mut mocks = Mocks::default();
        mocks
            .person_repository
            .expect_find_by_national_id()
            .return_once(|_| Ok(None));
        mocks
            .person_repository
            .expect_find_by_email()
            .return_once(move |_| Ok(Some(client.person().clone())));
        let ports = mocks.into_ports();

        let result = ports.execute(build_input()).await;
        assert!(matches!(result, Err(Error::EmailAlreadyRegistered(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_validation_precedes_store_access() -> anyhow::Result<()> {
        let ports = Mocks::default().into_ports();
        let result = ports
            .execute(Input {
                email: "not-an-email".to_owned(),
                ..build_input()
            })
            .await;
        assert!(matches!(result, Err(Error::Email(_))));

        let result = ports
            .execute(Input {
                password: String::new(),
                ..build_input()
            })
            .await;
        assert!(matches!(result, Err(Error::PasswordEmpty)));

        let result = ports
            .execute(Input {
                profiles: vec!["ROOT".to_owned()],
                ..build_input()
            })
            .await;
        assert!(matches!(result, Err(Error::Profile(_))));
        Ok(())
    }
}

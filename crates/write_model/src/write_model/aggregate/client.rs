use std::collections::BTreeSet;

use crate::value_object::{Email, Name, NationalId, PasswordDigest, PersonId, Profile, Version};

use super::person::{Person, PersonUpdate};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("version overflow")]
    VersionOverflow,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Client {
    person: Person,
    version: Version,
}

impl Client {
    /// The `CLIENT` profile is always added to `profiles`.
    pub fn create(
        id: PersonId,
        name: Name,
        national_id: NationalId,
        email: Email,
        password_digest: PasswordDigest,
        mut profiles: BTreeSet<Profile>,
    ) -> Self {
        profiles.insert(Profile::Client);
        Self {
            person: Person::new(id, name, national_id, email, password_digest, profiles),
            version: Version::new(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.person.id()
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn update(&self, update: PersonUpdate) -> Result<Self, Error> {
        let mut state = self.clone();
        state.person.apply(update, Profile::Client);
        state.version = self.version.next().map_err(|_| Error::VersionOverflow)?;
        Ok(state)
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

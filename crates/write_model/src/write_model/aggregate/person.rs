use std::collections::BTreeSet;

use crate::value_object::{DateTime, Email, Name, NationalId, PasswordDigest, PersonId, Profile};

/// Identity fields shared by technicians and clients.
///
/// `national_id` and `email` are unique across every person, whatever its kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    created_at: DateTime,
    email: Email,
    id: PersonId,
    name: Name,
    national_id: NationalId,
    password_digest: PasswordDigest,
    profiles: BTreeSet<Profile>,
}

/// Replacement values for a person's mutable fields.
///
/// `None` keeps the current password digest or profile set.
#[derive(Clone, Debug)]
pub struct PersonUpdate {
    pub email: Email,
    pub name: Name,
    pub national_id: NationalId,
    pub password_digest: Option<PasswordDigest>,
    pub profiles: Option<BTreeSet<Profile>>,
}

impl Person {
    pub(crate) fn new(
        id: PersonId,
        name: Name,
        national_id: NationalId,
        email: Email,
        password_digest: PasswordDigest,
        profiles: BTreeSet<Profile>,
    ) -> Self {
        Self {
            created_at: DateTime::now(),
            email,
            id,
            name,
            national_id,
            password_digest,
            profiles,
        }
    }

    pub fn created_at(&self) -> DateTime {
        self.created_at
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    pub fn profiles(&self) -> &BTreeSet<Profile> {
        &self.profiles
    }

    /// `kind_profile` survives any replacement of the profile set.
    pub(crate) fn apply(&mut self, update: PersonUpdate, kind_profile: Profile) {
        let PersonUpdate {
            email,
            name,
            national_id,
            password_digest,
            profiles,
        } = update;
        self.email = email;
        self.name = name;
        self.national_id = national_id;
        if let Some(password_digest) = password_digest {
            self.password_digest = password_digest;
        }
        if let Some(profiles) = profiles {
            self.profiles = profiles;
            self.profiles.insert(kind_profile);
        }
    }
}

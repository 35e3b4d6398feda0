#[derive(Debug, thiserror::Error)]
#[error("invalid person id")]
pub struct Error;

/// Identifier shared by technicians and clients. Assigned by the person store.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PersonId(u32);

impl PersonId {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(&self) -> Result<Self, Error> {
        self.0.checked_add(1).map(Self).ok_or(Error)
    }
}

impl From<u32> for PersonId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PersonId> for u32 {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

impl std::str::FromStr for PersonId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self).map_err(|_| Error)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("version overflow")]
pub struct Error;

/// Record revision. Starts at 1 and goes up by one on each stored update.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version(u32);

impl Version {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(1)
    }

    pub fn next(&self) -> Result<Self, Error> {
        self.0.checked_add(1).map(Self).ok_or(Error)
    }
}

impl From<Version> for u32 {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl TryFrom<u32> for Version {
    type Error = Error;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        if n == 0 {
            return Err(Error);
        }
        Ok(Self(n))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown profile")]
pub struct Error;

/// Role tag attached to a person.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Profile {
    Admin,
    Client,
    Technician,
}

impl Profile {
    pub fn code(&self) -> u8 {
        match self {
            Self::Admin => 0,
            Self::Client => 1,
            Self::Technician => 2,
        }
    }
}

impl TryFrom<u8> for Profile {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Admin),
            1 => Ok(Self::Client),
            2 => Ok(Self::Technician),
            _ => Err(Error),
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "CLIENT" => Ok(Self::Client),
            "TECHNICIAN" => Ok(Self::Technician),
            _ => Err(Error),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => "ADMIN",
            Self::Client => "CLIENT",
            Self::Technician => "TECHNICIAN",
        }
        .fmt(f)
    }
}

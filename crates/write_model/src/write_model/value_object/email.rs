#[derive(Debug, thiserror::Error)]
#[error("invalid email")]
pub struct Error;

/// Stored lowercased, so `A@x.com` and `a@x.com` are the same address.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(char::is_whitespace) {
            return Err(Error);
        }
        let (local, domain) = s.split_once('@').ok_or(Error)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(Error);
        }
        Ok(Self(s.to_lowercase()))
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid national id")]
pub struct Error;

/// National identification number (CPF). Digits with optional `.` and `-`
/// separators. Compared as written.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NationalId(String);

impl NationalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NationalId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return Err(Error);
        }
        if !s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
            return Err(Error);
        }
        Ok(Self(s.to_owned()))
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

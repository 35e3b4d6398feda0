use chrono::SubsecRound;

#[derive(Debug, thiserror::Error)]
#[error("error {0}")]
pub struct Error(String);

/// UTC timestamp with millisecond precision.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    pub fn now() -> Self {
        Self(SubsecRound::trunc_subsecs(chrono::Utc::now(), 3))
    }
}

impl std::str::FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| SubsecRound::trunc_subsecs(dt.to_utc(), 3))
            .map(Self)
            .map_err(|e| Error(e.to_string()))
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
            .fmt(f)
    }
}

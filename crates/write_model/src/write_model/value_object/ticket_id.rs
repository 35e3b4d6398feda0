#[derive(Debug, thiserror::Error)]
#[error("invalid ticket id")]
pub struct Error;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TicketId(u32);

impl TicketId {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(&self) -> Result<Self, Error> {
        self.0.checked_add(1).map(Self).ok_or(Error)
    }
}

impl From<u32> for TicketId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<TicketId> for u32 {
    fn from(id: TicketId) -> Self {
        id.0
    }
}

impl std::str::FromStr for TicketId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self).map_err(|_| Error)
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

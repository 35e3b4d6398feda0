use crate::value_object::{DateTime, PersonId, Priority, Status, TicketId, Title, Version};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("version overflow")]
    VersionOverflow,
}

/// A service request linking one technician and one client.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ticket {
    client_id: PersonId,
    closed_at: Option<DateTime>,
    id: TicketId,
    observations: String,
    opened_at: DateTime,
    priority: Priority,
    status: Status,
    technician_id: PersonId,
    title: Title,
    version: Version,
}

/// Field changes for [`Ticket::update`]. `None` keeps the current value.
#[derive(Clone, Debug, Default)]
pub struct TicketUpdate {
    pub client_id: Option<PersonId>,
    pub observations: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub technician_id: Option<PersonId>,
    pub title: Option<Title>,
}

impl Ticket {
    pub fn create(
        id: TicketId,
        technician_id: PersonId,
        client_id: PersonId,
        priority: Priority,
        status: Status,
        title: Title,
        observations: String,
    ) -> Self {
        let opened_at = DateTime::now();
        Self {
            client_id,
            closed_at: (status == Status::Closed).then_some(opened_at),
            id,
            observations,
            opened_at,
            priority,
            status,
            technician_id,
            title,
            version: Version::new(),
        }
    }

    pub fn client_id(&self) -> PersonId {
        self.client_id
    }

    pub fn closed_at(&self) -> Option<DateTime> {
        self.closed_at
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn observations(&self) -> &str {
        &self.observations
    }

    pub fn opened_at(&self) -> DateTime {
        self.opened_at
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn technician_id(&self) -> PersonId {
        self.technician_id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn update(&self, update: TicketUpdate) -> Result<Self, Error> {
        let TicketUpdate {
            client_id,
            observations,
            priority,
            status,
            technician_id,
            title,
        } = update;
        let mut state = self.clone();
        if let Some(title) = title {
            state.title = title;
        }
        if let Some(observations) = observations {
            state.observations = observations;
        }
        if let Some(client_id) = client_id {
            state.client_id = client_id;
        }
        if let Some(technician_id) = technician_id {
            state.technician_id = technician_id;
        }
        if let Some(priority) = priority {
            state.priority = priority;
        }
        if let Some(status) = status {
            state.change_status(status, DateTime::now());
        }
        state.version = self.version.next().map_err(|_| Error::VersionOverflow)?;
        Ok(state)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    fn change_status(&mut self, status: Status, at: DateTime) {
        match (self.status, status) {
            (Status::Closed, Status::Closed) => {}
            (_, Status::Closed) => self.closed_at = Some(at),
            (_, Status::Open | Status::InProgress) => self.closed_at = None,
        }
        self.status = status;
    }
}

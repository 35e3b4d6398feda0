use crate::port::{PersonQueryData, TicketQueryData};

/// Technician or client as returned to callers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PersonView {
    pub created_at: String,
    pub email: String,
    pub id: String,
    pub name: String,
    pub national_id: String,
    pub profiles: Vec<String>,
}

impl From<PersonQueryData> for PersonView {
    fn from(
        PersonQueryData {
            created_at,
            email,
            id,
            name,
            national_id,
            profiles,
            version: _,
        }: PersonQueryData,
    ) -> Self {
        Self {
            created_at: created_at.to_string(),
            email: email.to_string(),
            id: id.to_string(),
            name: name.to_string(),
            national_id: national_id.to_string(),
            profiles: profiles.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketView {
    pub client_id: String,
    pub client_name: String,
    pub closed_at: Option<String>,
    pub id: String,
    pub observations: String,
    pub opened_at: String,
    pub priority: String,
    pub status: String,
    pub technician_id: String,
    pub technician_name: String,
    pub title: String,
}

impl From<TicketQueryData> for TicketView {
    fn from(
        TicketQueryData {
            client_id,
            client_name,
            closed_at,
            id,
            observations,
            opened_at,
            priority,
            status,
            technician_id,
            technician_name,
            title,
            version: _,
        }: TicketQueryData,
    ) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_name: client_name.to_string(),
            closed_at: closed_at.map(|at| at.to_string()),
            id: id.to_string(),
            observations,
            opened_at: opened_at.to_string(),
            priority: priority.to_string(),
            status: status.to_string(),
            technician_id: technician_id.to_string(),
            technician_name: technician_name.to_string(),
            title,
        }
    }
}

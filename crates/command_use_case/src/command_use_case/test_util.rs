use std::{collections::BTreeSet, str::FromStr as _, sync::Arc};

use write_model::{
    aggregate::{Client, Technician},
    value_object::{Email, Name, NationalId, PasswordDigest, PersonId},
};

use crate::port::{
    client_repository::MockClientRepository, password_hasher::MockPasswordHasher,
    person_repository::MockPersonRepository, technician_repository::MockTechnicianRepository,
    ticket_repository::MockTicketRepository, ClientRepository, HasClientRepository,
    HasPasswordHasher, HasPersonRepository, HasTechnicianRepository, HasTicketRepository,
    PasswordHasher, PersonRepository, TechnicianRepository, TicketRepository,
};

/// Mocks without expectations panic when called.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) client_repository: MockClientRepository,
    pub(crate) password_hasher: MockPasswordHasher,
    pub(crate) person_repository: MockPersonRepository,
    pub(crate) technician_repository: MockTechnicianRepository,
    pub(crate) ticket_repository: MockTicketRepository,
}

impl Mocks {
    pub(crate) fn into_ports(self) -> TestPorts {
        TestPorts {
            client_repository: Arc::new(self.client_repository),
            password_hasher: Arc::new(self.password_hasher),
            person_repository: Arc::new(self.person_repository),
            technician_repository: Arc::new(self.technician_repository),
            ticket_repository: Arc::new(self.ticket_repository),
        }
    }
}

pub(crate) struct TestPorts {
    client_repository: Arc<MockClientRepository>,
    password_hasher: Arc<MockPasswordHasher>,
    person_repository: Arc<MockPersonRepository>,
    technician_repository: Arc<MockTechnicianRepository>,
    ticket_repository: Arc<MockTicketRepository>,
}

impl HasClientRepository for TestPorts {
    fn client_repository(&self) -> Arc<dyn ClientRepository + Send + Sync> {
        self.client_repository.clone()
    }
}

impl HasPasswordHasher for TestPorts {
    fn password_hasher(&self) -> Arc<dyn PasswordHasher + Send + Sync> {
        self.password_hasher.clone()
    }
}

impl HasPersonRepository for TestPorts {
    fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync> {
        self.person_repository.clone()
    }
}

impl HasTechnicianRepository for TestPorts {
    fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync> {
        self.technician_repository.clone()
    }
}

impl HasTicketRepository for TestPorts {
    fn ticket_repository(&self) -> Arc<dyn TicketRepository + Send + Sync> {
        self.ticket_repository.clone()
    }
}

pub(crate) fn build_technician(
    id: u32,
    national_id: &str,
    email: &str,
) -> anyhow::Result<Technician> {
    Ok(Technician::create(
        PersonId::from(id),
        Name::from_str("Linus Torvalds")?,
        NationalId::from_str(national_id)?,
        Email::from_str(email)?,
        PasswordDigest::new("digest".to_owned()),
        BTreeSet::new(),
    ))
}

pub(crate) fn build_client(id: u32, national_id: &str, email: &str) -> anyhow::Result<Client> {
    Ok(Client::create(
        PersonId::from(id),
        Name::from_str("Marie Curie")?,
        NationalId::from_str(national_id)?,
        Email::from_str(email)?,
        PasswordDigest::new("digest".to_owned()),
        BTreeSet::new(),
    ))
}

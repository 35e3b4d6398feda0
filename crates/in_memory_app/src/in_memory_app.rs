use std::sync::Arc;

use command_use_case::{
    create_client::{CreateClient, HasCreateClient},
    create_technician::{CreateTechnician, HasCreateTechnician},
    create_ticket::{CreateTicket, HasCreateTicket},
    delete_client::{DeleteClient, HasDeleteClient},
    delete_technician::{DeleteTechnician, HasDeleteTechnician},
    port::{
        ClientRepository, HasClientRepository, HasPasswordHasher, HasPersonRepository,
        HasTechnicianRepository, HasTicketRepository, PasswordHasher, PersonRepository,
        TechnicianRepository, TicketRepository,
    },
    update_client::{HasUpdateClient, UpdateClient},
    update_technician::{HasUpdateTechnician, UpdateTechnician},
    update_ticket::{HasUpdateTicket, UpdateTicket},
};
use in_memory_store::{
    InMemoryClientStore, InMemoryPersonStore, InMemoryTechnicianStore, InMemoryTicketStore,
};
use password_hasher::Sha256PasswordHasher;
use query_use_case::{
    get_client::{GetClient, HasGetClient},
    get_technician::{GetTechnician, HasGetTechnician},
    get_ticket::{GetTicket, HasGetTicket},
    list_clients::{HasListClients, ListClients},
    list_technicians::{HasListTechnicians, ListTechnicians},
    list_tickets::{HasListTickets, ListTickets},
    port::{
        ClientReader, HasClientReader, HasTechnicianReader, HasTicketReader, TechnicianReader,
        TicketReader,
    },
};
use write_model::value_object::PasswordDigest;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("password hasher")]
    PasswordHasher(#[source] password_hasher::Error),
}

/// Every use case wired to the in-memory stores. Clones share the same data.
#[derive(Clone)]
pub struct InMemoryApp {
    client_store: Arc<InMemoryClientStore>,
    password_hasher: Arc<Sha256PasswordHasher>,
    person_store: Arc<InMemoryPersonStore>,
    technician_store: Arc<InMemoryTechnicianStore>,
    ticket_store: Arc<InMemoryTicketStore>,
}

impl InMemoryApp {
    pub fn new(password_salt_len: usize) -> Result<Self, Error> {
        let password_hasher =
            Sha256PasswordHasher::new(password_salt_len).map_err(Error::PasswordHasher)?;
        let person_store = Arc::new(InMemoryPersonStore::new());
        Ok(Self {
            client_store: Arc::new(InMemoryClientStore::new()),
            password_hasher: Arc::new(password_hasher),
            person_store: person_store.clone(),
            technician_store: Arc::new(InMemoryTechnicianStore::new()),
            ticket_store: Arc::new(InMemoryTicketStore::new(person_store)),
        })
    }

    pub fn verify_password(&self, plaintext: &str, digest: &PasswordDigest) -> bool {
        self.password_hasher.verify(plaintext, digest)
    }
}

impl HasClientReader for InMemoryApp {
    fn client_reader(&self) -> Arc<dyn ClientReader + Send + Sync> {
        self.client_store.clone()
    }
}

impl HasClientRepository for InMemoryApp {
    fn client_repository(&self) -> Arc<dyn ClientRepository + Send + Sync> {
        self.client_store.clone()
    }
}

impl HasPasswordHasher for InMemoryApp {
    fn password_hasher(&self) -> Arc<dyn PasswordHasher + Send + Sync> {
        self.password_hasher.clone()
    }
}

impl HasPersonRepository for InMemoryApp {
    fn person_repository(&self) -> Arc<dyn PersonRepository + Send + Sync> {
        self.person_store.clone()
    }
}

impl HasTechnicianReader for InMemoryApp {
    fn technician_reader(&self) -> Arc<dyn TechnicianReader + Send + Sync> {
        self.technician_store.clone()
    }
}

impl HasTechnicianRepository for InMemoryApp {
    fn technician_repository(&self) -> Arc<dyn TechnicianRepository + Send + Sync> {
        self.technician_store.clone()
    }
}

impl HasTicketReader for InMemoryApp {
    fn ticket_reader(&self) -> Arc<dyn TicketReader + Send + Sync> {
        self.ticket_store.clone()
    }
}

impl HasTicketRepository for InMemoryApp {
    fn ticket_repository(&self) -> Arc<dyn TicketRepository + Send + Sync> {
        self.ticket_store.clone()
    }
}

impl CreateClient for InMemoryApp {}

impl HasCreateClient for InMemoryApp {
    fn create_client(&self) -> Arc<dyn CreateClient + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl CreateTechnician for InMemoryApp {}

impl HasCreateTechnician for InMemoryApp {
    fn create_technician(&self) -> Arc<dyn CreateTechnician + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl CreateTicket for InMemoryApp {}

impl HasCreateTicket for InMemoryApp {
    fn create_ticket(&self) -> Arc<dyn CreateTicket + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl DeleteClient for InMemoryApp {}

impl HasDeleteClient for InMemoryApp {
    fn delete_client(&self) -> Arc<dyn DeleteClient + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl DeleteTechnician for InMemoryApp {}

impl HasDeleteTechnician for InMemoryApp {
    fn delete_technician(&self) -> Arc<dyn DeleteTechnician + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl UpdateClient for InMemoryApp {}

impl HasUpdateClient for InMemoryApp {
    fn update_client(&self) -> Arc<dyn UpdateClient + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl UpdateTechnician for InMemoryApp {}

impl HasUpdateTechnician for InMemoryApp {
    fn update_technician(&self) -> Arc<dyn UpdateTechnician + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl UpdateTicket for InMemoryApp {}

impl HasUpdateTicket for InMemoryApp {
    fn update_ticket(&self) -> Arc<dyn UpdateTicket + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl GetClient for InMemoryApp {}

impl HasGetClient for InMemoryApp {
    fn get_client(&self) -> Arc<dyn GetClient + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl GetTechnician for InMemoryApp {}

impl HasGetTechnician for InMemoryApp {
    fn get_technician(&self) -> Arc<dyn GetTechnician + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl GetTicket for InMemoryApp {}

impl HasGetTicket for InMemoryApp {
    fn get_ticket(&self) -> Arc<dyn GetTicket + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl ListClients for InMemoryApp {}

impl HasListClients for InMemoryApp {
    fn list_clients(&self) -> Arc<dyn ListClients + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl ListTechnicians for InMemoryApp {}

impl HasListTechnicians for InMemoryApp {
    fn list_technicians(&self) -> Arc<dyn ListTechnicians + Send + Sync> {
        Arc::new(self.clone())
    }
}

impl ListTickets for InMemoryApp {}

impl HasListTickets for InMemoryApp {
    fn list_tickets(&self) -> Arc<dyn ListTickets + Send + Sync> {
        Arc::new(self.clone())
    }
}

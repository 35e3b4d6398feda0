mod error;
mod in_memory_client_store;
mod in_memory_person_store;
mod in_memory_technician_store;
mod in_memory_ticket_store;

pub use self::error::Error;
pub use self::in_memory_client_store::InMemoryClientStore;
pub use self::in_memory_person_store::InMemoryPersonStore;
pub use self::in_memory_technician_store::InMemoryTechnicianStore;
pub use self::in_memory_ticket_store::InMemoryTicketStore;

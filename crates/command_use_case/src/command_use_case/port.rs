pub mod client_repository;
pub mod password_hasher;
pub mod person_repository;
pub mod technician_repository;
pub mod ticket_repository;

pub use self::client_repository::{ClientRepository, HasClientRepository};
pub use self::password_hasher::{HasPasswordHasher, PasswordHasher};
pub use self::person_repository::{HasPersonRepository, PersonRepository};
pub use self::technician_repository::{HasTechnicianRepository, TechnicianRepository};
pub use self::ticket_repository::{HasTicketRepository, TicketRepository};

pub mod client;
pub mod person;
pub mod technician;
pub mod ticket;

pub use self::client::Client;
pub use self::person::Person;
pub use self::technician::Technician;
pub use self::ticket::Ticket;

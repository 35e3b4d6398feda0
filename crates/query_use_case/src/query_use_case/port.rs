pub mod client_reader;
pub mod technician_reader;
pub mod ticket_reader;

pub use self::client_reader::{ClientReader, HasClientReader};
pub use self::technician_reader::{HasTechnicianReader, PersonQueryData, TechnicianReader};
pub use self::ticket_reader::{HasTicketReader, TicketQueryData, TicketReader};

pub mod get_client;
pub mod get_technician;
pub mod get_ticket;
pub mod list_clients;
pub mod list_technicians;
pub mod list_tickets;
pub mod port;
pub mod view;

pub mod create_client;
pub mod create_technician;
pub mod create_ticket;
pub mod delete_client;
pub mod delete_technician;
pub mod identity;
pub mod port;
pub mod update_client;
pub mod update_technician;
pub mod update_ticket;
#[cfg(test)]
pub(crate) mod test_util;

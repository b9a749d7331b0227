/// Shared service types
pub mod common;
/// ModemManager snapshot service
pub mod modem_manager;

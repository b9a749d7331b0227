//! ModemManager D-Bus proxy definitions.
//!
//! The object manager itself is `zbus::fdo::ObjectManagerProxy`; the per-modem
//! interfaces are declared here.

#![allow(missing_docs)]
pub mod bearer;
pub mod modem;
pub mod modem_3gpp;
pub mod signal;
pub mod sim;

pub use bearer::BearerProxy;
pub use modem::ModemProxy;
pub use modem_3gpp::Modem3gppProxy;
pub use signal::SignalProxy;
pub use sim::SimProxy;

/// Well-known bus name of ModemManager.
pub const MM_SERVICE: &str = "org.freedesktop.ModemManager1";
/// Object path of the ModemManager object manager.
pub const MM_PATH: &str = "/org/freedesktop/ModemManager1";
/// Interface every modem object implements.
pub const MODEM_INTERFACE: &str = "org.freedesktop.ModemManager1.Modem";
/// 3GPP registration sub-capability.
pub const MODEM_3GPP_INTERFACE: &str = "org.freedesktop.ModemManager1.Modem.Modem3gpp";
/// Extended signal sub-capability.
pub const SIGNAL_INTERFACE: &str = "org.freedesktop.ModemManager1.Modem.Signal";

/// Per-device aggregation of remote queries into records
mod aggregator;
/// Remote calls the aggregator depends on
mod backend;
/// ModemManager backend over D-Bus
mod dbus;
/// Enumerated device handles
mod device;
/// Modem service errors
mod error;
/// D-Bus proxy implementations for ModemManager interfaces.
mod proxy;
/// Snapshot record
mod record;
/// High-level service API for snapshots.
mod service;
/// Type definitions for ModemManager enums, flags, and decoded dictionaries.
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregator::{PropertyAggregator, SubQuery};
pub use backend::{BaseProperties, ModemBackend, Registration, SimIdentity};
pub use dbus::ModemManagerBackend;
pub use device::DeviceHandle;
pub use error::ModemError;
pub use proxy::{
    BearerProxy, MM_PATH, MM_SERVICE, MODEM_3GPP_INTERFACE, MODEM_INTERFACE, Modem3gppProxy,
    ModemProxy, SIGNAL_INTERFACE, SignalProxy, SimProxy,
};
pub use record::ModemRecord;
pub use service::ModemService;
pub use types::{
    AccessTechnologies, BearerStats, DataUsage, LteSignal, ModemState, SIGNAL_UNAVAILABLE,
    parse_plmn,
};

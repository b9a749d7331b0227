//! ModemManager extended signal interface.

use std::collections::HashMap;

use zbus::{proxy, zvariant::OwnedValue};

/// Extended signal quality information.
#[proxy(
    default_service = "org.freedesktop.ModemManager1",
    interface = "org.freedesktop.ModemManager1.Modem.Signal"
)]
pub trait Signal {
    /// Setup extended signal quality information retrieval.
    ///
    /// `rate` is the refresh rate in seconds; 0 disables retrieval.
    fn setup(&self, rate: u32) -> zbus::Result<()>;

    /// Dictionary of available signal information for the LTE access technology.
    ///
    /// Known keys are "rssi", "rsrq", "rsrp" and "snr", each a double.
    #[zbus(property)]
    fn lte(&self) -> zbus::Result<HashMap<String, OwnedValue>>;
}

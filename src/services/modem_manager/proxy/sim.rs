//! ModemManager SIM interface.

use zbus::proxy;

/// SIM card of a modem.
#[proxy(
    default_service = "org.freedesktop.ModemManager1",
    interface = "org.freedesktop.ModemManager1.Sim"
)]
pub trait Sim {
    /// The ICCID of the SIM card.
    #[zbus(property)]
    fn sim_identifier(&self) -> zbus::Result<String>;

    /// The IMSI of the SIM card, if any.
    #[zbus(property)]
    fn imsi(&self) -> zbus::Result<String>;
}

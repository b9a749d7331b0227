//! ModemManager Modem interface.

use zbus::{proxy, zvariant::OwnedObjectPath};

/// Generic modem.
///
/// Every modem object exposed by ModemManager implements this interface.
#[proxy(
    default_service = "org.freedesktop.ModemManager1",
    interface = "org.freedesktop.ModemManager1.Modem"
)]
pub trait Modem {
    /// List configured packet data bearers (EPS Bearers, PDP Contexts, or CDMA2000
    /// Packet Data Sessions).
    fn list_bearers(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// The path of the primary active SIM object, or `/` if no SIM is available.
    #[zbus(property)]
    fn sim(&self) -> zbus::Result<OwnedObjectPath>;

    /// The equipment manufacturer, as reported by the modem.
    #[zbus(property)]
    fn manufacturer(&self) -> zbus::Result<String>;

    /// The equipment model, as reported by the modem.
    #[zbus(property)]
    fn model(&self) -> zbus::Result<String>;

    /// A best-effort device identifier based on various device information like
    /// model name, firmware revision, USB/PCI/PCMCIA IDs, and other properties.
    #[zbus(property)]
    fn device_identifier(&self) -> zbus::Result<String>;

    /// The identity of the device. This will be the IMEI number for GSM devices and
    /// the hex-format ESN/MEID for CDMA devices.
    #[zbus(property)]
    fn equipment_identifier(&self) -> zbus::Result<String>;

    /// Overall state of the modem, given as a MMModemState value.
    #[zbus(property)]
    fn state(&self) -> zbus::Result<i32>;

    /// Bitmask of MMModemAccessTechnology values describing the access
    /// technologies used by the modem, if any.
    #[zbus(property)]
    fn access_technologies(&self) -> zbus::Result<u32>;

    /// Signal quality in percent (0 - 100) and whether the value was recently
    /// taken.
    #[zbus(property)]
    fn signal_quality(&self) -> zbus::Result<(u32, bool)>;
}

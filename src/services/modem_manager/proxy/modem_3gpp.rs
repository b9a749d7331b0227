//! ModemManager 3GPP interface.

use zbus::proxy;

/// 3GPP registration details of a modem.
#[proxy(
    default_service = "org.freedesktop.ModemManager1",
    interface = "org.freedesktop.ModemManager1.Modem.Modem3gpp"
)]
pub trait Modem3gpp {
    /// Code of the operator to which the mobile is currently registered.
    ///
    /// Returned in the format "MCCMNC", where MCC is the three-digit ITU E.212
    /// Mobile Country Code and MNC is the two- or three-digit GSM Mobile Network
    /// Code. e.g. "31026" or "310260".
    #[zbus(property)]
    fn operator_code(&self) -> zbus::Result<String>;

    /// Name of the operator to which the mobile is currently registered.
    #[zbus(property)]
    fn operator_name(&self) -> zbus::Result<String>;
}

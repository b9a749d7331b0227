//! ModemManager Bearer interface.

use std::collections::HashMap;

use zbus::{proxy, zvariant::OwnedValue};

/// Packet data bearer of a modem.
#[proxy(
    default_service = "org.freedesktop.ModemManager1",
    interface = "org.freedesktop.ModemManager1.Bearer"
)]
pub trait Bearer {
    /// Additional statistics collected for the bearer.
    ///
    /// Includes "tx-bytes" and "rx-bytes" (both u64) when available; empty when
    /// the bearer exposes no statistics.
    #[zbus(property)]
    fn stats(&self) -> zbus::Result<HashMap<String, OwnedValue>>;
}

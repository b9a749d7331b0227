/// Modem service errors
#[derive(thiserror::Error, Debug)]
pub enum ModemError {
    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Could not reach the system bus
    #[error("Error connecting to D-Bus: {0}")]
    ConnectionFailed(zbus::Error),

    /// Could not build the ModemManager object manager
    #[error("Error creating ModemManager manager: {0}")]
    ManagerCreationFailed(zbus::Error),

    /// Snapshot requested without a live manager
    #[error("Modem manager not initialized")]
    ManagerNotInitialized,

    /// Listing the managed objects failed
    #[error("Failed to enumerate modems: {0}")]
    EnumerationFailed(zbus::fdo::Error),

    /// Enumeration succeeded but returned nothing
    #[error("No modems detected")]
    NoModemsDetected,

    /// Modem has no SIM object
    #[error("Modem {path} has no SIM")]
    NoSim {
        /// DBus path of the modem.
        path: String,
    },

    /// A remote call did not finish in time
    #[error("{operation} timed out for {path}")]
    Timeout {
        /// The operation that timed out
        operation: &'static str,
        /// DBus path of the modem.
        path: String,
    },
}

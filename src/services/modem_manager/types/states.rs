//! ModemManager state types.

use std::fmt;

use serde::Serialize;

/// MMModemState values describe the overall state of a modem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModemState {
    /// The modem is unusable.
    Failed = -1,
    /// State unknown or not reportable.
    #[default]
    Unknown = 0,
    /// The modem is currently being initialized.
    Initializing = 1,
    /// The modem needs to be unlocked.
    Locked = 2,
    /// The modem is not enabled and is powered down.
    Disabled = 3,
    /// The modem is currently transitioning to the disabled state.
    Disabling = 4,
    /// The modem is currently transitioning to the enabled state.
    Enabling = 5,
    /// The modem is enabled and powered on but not registered with a network
    /// provider and not available for data connections.
    Enabled = 6,
    /// The modem is searching for a network provider to register with.
    Searching = 7,
    /// The modem is registered with a network provider, and data connections and
    /// messaging may be available for use.
    Registered = 8,
    /// The modem is disconnecting and deactivating the last active packet data
    /// bearer. This state will not be entered if more than one packet data bearer
    /// is active and one of the active bearers is deactivated.
    Disconnecting = 9,
    /// The modem is activating and connecting the first packet data bearer.
    /// Subsequent bearer activations when another bearer is already active do not
    /// cause this state to be entered.
    Connecting = 10,
    /// One or more packet data bearers is active and connected.
    Connected = 11,
}

impl ModemState {
    /// Convert from D-Bus i32 representation
    pub fn from_i32(value: i32) -> Self {
        match value {
            -1 => Self::Failed,
            1 => Self::Initializing,
            2 => Self::Locked,
            3 => Self::Disabled,
            4 => Self::Disabling,
            5 => Self::Enabling,
            6 => Self::Enabled,
            7 => Self::Searching,
            8 => Self::Registered,
            9 => Self::Disconnecting,
            10 => Self::Connecting,
            11 => Self::Connected,
            _ => Self::Unknown,
        }
    }

    /// Canonical lowercase name, as ModemManager prints it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Failed => "failed",
            Self::Unknown => "unknown",
            Self::Initializing => "initializing",
            Self::Locked => "locked",
            Self::Disabled => "disabled",
            Self::Disabling => "disabling",
            Self::Enabling => "enabling",
            Self::Enabled => "enabled",
            Self::Searching => "searching",
            Self::Registered => "registered",
            Self::Disconnecting => "disconnecting",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
        }
    }
}

impl fmt::Display for ModemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::collections::BTreeSet;

use crate::services::common::types::ObjectPath;

use super::proxy::{MODEM_3GPP_INTERFACE, MODEM_INTERFACE, SIGNAL_INTERFACE};

/// Opaque reference to one object exported by ModemManager.
///
/// Produced by enumeration. Only the path and the interface names are kept;
/// proxies are built on demand for the duration of a single sub-query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceHandle {
    /// D-Bus object path of the device.
    pub path: ObjectPath,

    /// Interfaces the object implements.
    pub interfaces: BTreeSet<String>,
}

impl DeviceHandle {
    /// Create a handle from a path and the interfaces exported at it.
    pub fn new<I, S>(path: impl Into<ObjectPath>, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            interfaces: interfaces.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the object is a live modem.
    pub fn is_modem(&self) -> bool {
        self.interfaces.contains(MODEM_INTERFACE)
    }

    /// Whether the modem exposes 3GPP registration details.
    pub fn has_3gpp(&self) -> bool {
        self.interfaces.contains(MODEM_3GPP_INTERFACE)
    }

    /// Whether the modem exposes extended signal information.
    pub fn has_signal(&self) -> bool {
        self.interfaces.contains(SIGNAL_INTERFACE)
    }

    /// Trailing numeric index of the path, e.g. `3` for `.../Modem/3`.
    pub fn index(&self) -> Option<u32> {
        self.path.rsplit('/').next()?.parse().ok()
    }
}

/// Put handles in a stable order: by modem index, then by path.
///
/// The object manager hands objects back as a map, so its order is arbitrary.
pub(crate) fn sort_handles(handles: &mut [DeviceHandle]) {
    handles.sort_by(|a, b| {
        a.index()
            .unwrap_or(u32::MAX)
            .cmp(&b.index().unwrap_or(u32::MAX))
            .then_with(|| a.path.cmp(&b.path))
    });
}

/// D-Bus object path reference.
///
/// Represents a D-Bus object path as a string (e.g., "/org/freedesktop/ModemManager1/Modem/0").
/// Records and device handles keep paths rather than proxies; proxies are built
/// on demand from these paths.
pub type ObjectPath = String;

use serde::Serialize;

use crate::services::common::types::ObjectPath;

use super::types::{DataUsage, LteSignal, ModemState};

/// Everything known about one modem at the time of a snapshot.
///
/// Only `path` is guaranteed. Every other field is filled from a separate
/// remote call and is left unknown when that call fails: `None` for strings,
/// `0` for the PLMN and counters, [`LteSignal::UNAVAILABLE`] for LTE metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModemRecord {
    /// D-Bus object path of the modem. Unique within a snapshot.
    pub path: ObjectPath,

    /// Overall modem state.
    pub state: ModemState,

    /// Equipment manufacturer.
    pub manufacturer: Option<String>,

    /// Equipment model.
    pub model: Option<String>,

    /// Best-effort device identifier computed by ModemManager.
    pub device_id: Option<String>,

    /// Equipment identifier (IMEI for 3GPP devices).
    pub imei: Option<String>,

    /// SIM ICCID.
    pub iccid: Option<String>,

    /// SIM IMSI.
    pub imsi: Option<String>,

    /// Name of the operator the modem is registered with.
    pub carrier: Option<String>,

    /// PLMN (MCC + MNC) of the serving network, `0` if unknown.
    pub plmn: u32,

    /// Signal quality in percent.
    pub signal_quality: u32,

    /// Whether `signal_quality` was taken recently.
    pub signal_recent: bool,

    /// Extended LTE signal metrics.
    pub lte: LteSignal,

    /// Access technologies in use, e.g. `"lte"` or `"umts, hsdpa"`.
    pub access_technologies: Option<String>,

    /// Bytes moved across all bearers.
    pub data_usage: DataUsage,
}

impl ModemRecord {
    /// A record with only the path known.
    pub fn new(path: impl Into<ObjectPath>) -> Self {
        Self {
            path: path.into(),
            state: ModemState::Unknown,
            manufacturer: None,
            model: None,
            device_id: None,
            imei: None,
            iccid: None,
            imsi: None,
            carrier: None,
            plmn: 0,
            signal_quality: 0,
            signal_recent: false,
            lte: LteSignal::UNAVAILABLE,
            access_technologies: None,
            data_usage: DataUsage::default(),
        }
    }
}

//! Extended signal and bearer statistics decoded from ModemManager dictionaries.

use std::collections::HashMap;

use serde::Serialize;
use zbus::zvariant::{OwnedValue, Value};

/// Reserved value for a signal metric the modem did not report.
///
/// Distinct from `0`, which is a valid reading.
pub const SIGNAL_UNAVAILABLE: i32 = -1;

/// LTE physical-layer signal metrics.
///
/// Each metric is [`SIGNAL_UNAVAILABLE`] when not reported. Use the accessors
/// to get an `Option` instead of comparing against the sentinel by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LteSignal {
    /// Reference Signal Received Power, dBm.
    pub rsrp: i32,
    /// Reference Signal Received Quality, dB.
    pub rsrq: i32,
    /// Signal-to-noise ratio, dB.
    pub snr: i32,
    /// Received Signal Strength Indicator, dBm.
    pub rssi: i32,
}

impl Default for LteSignal {
    fn default() -> Self {
        Self::UNAVAILABLE
    }
}

impl LteSignal {
    /// All four metrics unreported.
    pub const UNAVAILABLE: Self = Self {
        rsrp: SIGNAL_UNAVAILABLE,
        rsrq: SIGNAL_UNAVAILABLE,
        snr: SIGNAL_UNAVAILABLE,
        rssi: SIGNAL_UNAVAILABLE,
    };

    /// Decode the `Lte` property of `org.freedesktop.ModemManager1.Modem.Signal`.
    ///
    /// Keys missing from the dictionary, or carrying a non-numeric value, stay
    /// at the sentinel. Readings are truncated towards zero to whole units.
    pub fn from_dict(dict: &HashMap<String, OwnedValue>) -> Self {
        let metric = |key: &str| {
            dict.get(key)
                .and_then(as_f64)
                .map_or(SIGNAL_UNAVAILABLE, |value| value as i32)
        };

        Self {
            rsrp: metric("rsrp"),
            rsrq: metric("rsrq"),
            snr: metric("snr"),
            rssi: metric("rssi"),
        }
    }

    /// RSRP if reported.
    pub fn rsrp(&self) -> Option<i32> {
        reported(self.rsrp)
    }

    /// RSRQ if reported.
    pub fn rsrq(&self) -> Option<i32> {
        reported(self.rsrq)
    }

    /// SNR if reported.
    pub fn snr(&self) -> Option<i32> {
        reported(self.snr)
    }

    /// RSSI if reported.
    pub fn rssi(&self) -> Option<i32> {
        reported(self.rssi)
    }

    /// True when at least one metric was reported.
    pub fn is_reported(&self) -> bool {
        *self != Self::UNAVAILABLE
    }
}

fn reported(value: i32) -> Option<i32> {
    (value != SIGNAL_UNAVAILABLE).then_some(value)
}

/// Transmit/receive counters of a single bearer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BearerStats {
    /// Bytes transmitted.
    pub tx_bytes: u64,
    /// Bytes received.
    pub rx_bytes: u64,
}

impl BearerStats {
    /// Decode the `Stats` property of `org.freedesktop.ModemManager1.Bearer`.
    ///
    /// Returns `None` for an empty dictionary, which is how ModemManager says
    /// the bearer exposes no statistics. A missing counter counts as zero.
    pub fn from_dict(dict: &HashMap<String, OwnedValue>) -> Option<Self> {
        if dict.is_empty() {
            return None;
        }

        let counter = |key: &str| dict.get(key).and_then(as_u64).unwrap_or(0);

        Some(Self {
            tx_bytes: counter("tx-bytes"),
            rx_bytes: counter("rx-bytes"),
        })
    }
}

/// Byte counters summed across every bearer of a modem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DataUsage {
    /// Total bytes transmitted.
    pub tx_bytes: u64,
    /// Total bytes received.
    pub rx_bytes: u64,
}

impl DataUsage {
    /// Sum the counters of all given bearers.
    pub fn total<'a>(bearers: impl IntoIterator<Item = &'a BearerStats>) -> Self {
        bearers.into_iter().fold(Self::default(), |acc, stats| Self {
            tx_bytes: acc.tx_bytes.saturating_add(stats.tx_bytes),
            rx_bytes: acc.rx_bytes.saturating_add(stats.rx_bytes),
        })
    }
}

fn as_f64(value: &OwnedValue) -> Option<f64> {
    match &**value {
        Value::F64(v) => Some(*v),
        Value::I32(v) => Some(f64::from(*v)),
        Value::U32(v) => Some(f64::from(*v)),
        _ => None,
    }
}

fn as_u64(value: &OwnedValue) -> Option<u64> {
    match &**value {
        Value::U64(v) => Some(*v),
        Value::U32(v) => Some(u64::from(*v)),
        _ => None,
    }
}

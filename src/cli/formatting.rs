//! Formatting utilities for CLI output.
//!
//! Renders snapshot records as the human-readable report and styles error
//! messages for the terminal.

use crate::services::modem_manager::ModemRecord;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats one record as an indented block.
///
/// Absent strings print as `Unknown`. LTE metrics are listed only when the
/// modem reported them; zero values are printed like any other reading.
pub fn format_record(record: &ModemRecord) -> String {
    let mut out = format!("Modem at path: {}\n", record.path);
    out.push_str(&format!("  State: {}\n", record.state));
    out.push_str(&format!("  Manufacturer: {}\n", or_unknown(&record.manufacturer)));
    out.push_str(&format!("  Model: {}\n", or_unknown(&record.model)));
    out.push_str(&format!("  Device ID: {}\n", or_unknown(&record.device_id)));
    out.push_str(&format!("  IMEI: {}\n", or_unknown(&record.imei)));
    out.push_str(&format!("  ICCID: {}\n", or_unknown(&record.iccid)));
    out.push_str(&format!("  IMSI: {}\n", or_unknown(&record.imsi)));
    out.push_str(&format!("  Carrier: {}\n", or_unknown(&record.carrier)));
    out.push_str(&format!("  PLMN: {}\n", record.plmn));

    let recency = if record.signal_recent {
        "recent"
    } else {
        "not recent"
    };
    out.push_str(&format!(
        "  Signal Quality: {}% ({recency})\n",
        record.signal_quality
    ));

    out.push_str("  Extended Signal Quality:\n");
    if let Some(rsrp) = record.lte.rsrp() {
        out.push_str(&format!("    LTE RSRP: {rsrp} dBm\n"));
    }
    if let Some(rsrq) = record.lte.rsrq() {
        out.push_str(&format!("    LTE RSRQ: {rsrq} dB\n"));
    }
    if let Some(snr) = record.lte.snr() {
        out.push_str(&format!("    LTE SNR: {snr} dB\n"));
    }
    if let Some(rssi) = record.lte.rssi() {
        out.push_str(&format!("    LTE RSSI: {rssi} dBm\n"));
    }

    out.push_str(&format!(
        "  Access Technologies: {}\n",
        or_unknown(&record.access_technologies)
    ));
    out.push_str("  Data Usage:\n");
    out.push_str(&format!(
        "    Transmitted Bytes: {} bytes\n",
        record.data_usage.tx_bytes
    ));
    out.push_str(&format!(
        "    Received Bytes: {} bytes\n",
        record.data_usage.rx_bytes
    ));

    out
}

/// Formats a whole snapshot, one block per record.
pub fn format_records(records: &[ModemRecord]) -> String {
    records.iter().map(format_record).collect()
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("Unknown")
}

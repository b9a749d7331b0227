use async_trait::async_trait;

use super::{
    DeviceHandle, ModemError,
    types::{BearerStats, LteSignal, ModemState},
};

/// Fields read from the modem object itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BaseProperties {
    /// Overall modem state.
    pub state: ModemState,
    /// Equipment manufacturer.
    pub manufacturer: Option<String>,
    /// Equipment model.
    pub model: Option<String>,
    /// Device identifier.
    pub device_id: Option<String>,
    /// Equipment identifier.
    pub imei: Option<String>,
    /// Signal quality in percent.
    pub signal_quality: u32,
    /// Whether the signal quality is recent.
    pub signal_recent: bool,
    /// Access technology summary.
    pub access_technologies: Option<String>,
}

/// Serving operator read from the 3GPP sub-capability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    /// Operator name.
    pub carrier: Option<String>,
    /// Raw "MCCMNC" operator code.
    pub operator_code: Option<String>,
}

/// Identity read from the modem's SIM.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimIdentity {
    /// SIM IMSI.
    pub imsi: Option<String>,
    /// SIM ICCID.
    pub iccid: Option<String>,
}

/// Remote calls the aggregator needs from the modem management service.
///
/// Every method is an independent, fallible round trip. Implementations hold
/// only read-only state so one instance can serve concurrent device workers.
#[async_trait]
pub trait ModemBackend: Send + Sync {
    /// List every object the service exports.
    ///
    /// # Errors
    /// Returns error if the listing call itself fails.
    async fn list_devices(&self) -> Result<Vec<DeviceHandle>, ModemError>;

    /// Read identity, state and coarse signal of a modem.
    ///
    /// # Errors
    /// Returns error if the modem object cannot be read.
    async fn base_properties(&self, device: &DeviceHandle) -> Result<BaseProperties, ModemError>;

    /// Read the operator the modem is registered with.
    ///
    /// # Errors
    /// Returns error if the 3GPP interface cannot be read.
    async fn registration(&self, device: &DeviceHandle) -> Result<Registration, ModemError>;

    /// Read IMSI and ICCID from the modem's active SIM.
    ///
    /// # Errors
    /// Returns error if the modem has no SIM or it cannot be read.
    async fn sim(&self, device: &DeviceHandle) -> Result<SimIdentity, ModemError>;

    /// Request periodic signal refresh every `refresh_rate_secs` seconds and read
    /// the LTE metrics.
    ///
    /// # Errors
    /// Returns error if the signal setup or read fails.
    async fn lte_signal(
        &self,
        device: &DeviceHandle,
        refresh_rate_secs: u32,
    ) -> Result<LteSignal, ModemError>;

    /// Read the statistics of every bearer that exposes them.
    ///
    /// # Errors
    /// Returns error if the bearers cannot be listed.
    async fn bearer_stats(&self, device: &DeviceHandle) -> Result<Vec<BearerStats>, ModemError>;
}

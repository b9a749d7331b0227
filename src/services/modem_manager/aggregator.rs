use std::{collections::HashSet, fmt, future::Future};

use futures::{StreamExt, future, stream};
use tracing::{debug, instrument, warn};

use crate::config::AggregationConfig;

use super::{
    BaseProperties, DeviceHandle, ModemBackend, ModemError, ModemRecord, Registration,
    SimIdentity,
    types::{DataUsage, LteSignal, parse_plmn},
};

/// Remote query issued per device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubQuery {
    /// Modem identity, state and coarse signal.
    Base,
    /// 3GPP operator name and code.
    Registration,
    /// SIM identity.
    Sim,
    /// Extended signal setup and read.
    Signal,
    /// Bearer listing and statistics.
    Bearers,
}

impl SubQuery {
    fn as_str(self) -> &'static str {
        match self {
            Self::Base => "modem properties",
            Self::Registration => "registration",
            Self::Sim => "SIM",
            Self::Signal => "signal",
            Self::Bearers => "bearers",
        }
    }
}

impl fmt::Display for SubQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds one [`ModemRecord`] per device from independent remote queries.
///
/// Every object that implements the modem interface contributes a record.
/// Each remote query is bounded and independent: a failure or timeout is
/// logged and leaves only that query's fields unknown.
pub struct PropertyAggregator<'a, B: ModemBackend + ?Sized> {
    backend: &'a B,
    config: AggregationConfig,
}

impl<'a, B: ModemBackend + ?Sized> PropertyAggregator<'a, B> {
    /// Create an aggregator over a backend.
    pub fn new(backend: &'a B, config: AggregationConfig) -> Self {
        Self { backend, config }
    }

    /// Build records for `devices`, in the same order.
    ///
    /// Never fails: objects that are not modems are skipped, as are repeated
    /// paths.
    #[instrument(skip_all, fields(devices = devices.len()))]
    pub async fn aggregate(&self, devices: &[DeviceHandle]) -> Vec<ModemRecord> {
        let mut seen = HashSet::new();
        let unique = devices.iter().filter(|device| {
            let first = seen.insert(device.path.as_str());
            if !first {
                debug!(path = %device.path, "duplicate device path, skipping");
            }
            first
        });

        stream::iter(unique)
            .map(|device| self.record_for(device))
            .buffered(self.config.max_concurrent_devices.max(1))
            .filter_map(future::ready)
            .collect()
            .await
    }

    async fn record_for(&self, device: &DeviceHandle) -> Option<ModemRecord> {
        if !device.is_modem() {
            debug!(path = %device.path, "object is not a modem, skipping");
            return None;
        }

        let (base, registration, sim, lte, data_usage) = tokio::join!(
            self.base(device),
            self.registration(device),
            self.sim(device),
            self.lte_signal(device),
            self.data_usage(device),
        );

        Some(ModemRecord {
            path: device.path.clone(),
            state: base.state,
            manufacturer: base.manufacturer,
            model: base.model,
            device_id: base.device_id,
            imei: base.imei,
            iccid: sim.iccid,
            imsi: sim.imsi,
            carrier: registration.carrier,
            plmn: parse_plmn(registration.operator_code.as_deref()),
            signal_quality: base.signal_quality,
            signal_recent: base.signal_recent,
            lte,
            access_technologies: base.access_technologies,
            data_usage,
        })
    }

    async fn base(&self, device: &DeviceHandle) -> BaseProperties {
        let result = self
            .bounded(SubQuery::Base, device, self.backend.base_properties(device))
            .await;
        absorb(SubQuery::Base, device, result)
    }

    async fn registration(&self, device: &DeviceHandle) -> Registration {
        if !device.has_3gpp() {
            return Registration::default();
        }

        let result = self
            .bounded(SubQuery::Registration, device, self.backend.registration(device))
            .await;
        absorb(SubQuery::Registration, device, result)
    }

    async fn sim(&self, device: &DeviceHandle) -> SimIdentity {
        let result = self
            .bounded(SubQuery::Sim, device, self.backend.sim(device))
            .await;
        absorb(SubQuery::Sim, device, result)
    }

    async fn lte_signal(&self, device: &DeviceHandle) -> LteSignal {
        if !device.has_signal() {
            return LteSignal::UNAVAILABLE;
        }

        let result = self
            .bounded(
                SubQuery::Signal,
                device,
                self.backend
                    .lte_signal(device, self.config.signal_refresh_rate_secs),
            )
            .await;
        absorb(SubQuery::Signal, device, result)
    }

    async fn data_usage(&self, device: &DeviceHandle) -> DataUsage {
        let result = self
            .bounded(SubQuery::Bearers, device, self.backend.bearer_stats(device))
            .await
            .map(|bearers| DataUsage::total(&bearers));
        absorb(SubQuery::Bearers, device, result)
    }

    async fn bounded<T>(
        &self,
        query: SubQuery,
        device: &DeviceHandle,
        call: impl Future<Output = Result<T, ModemError>>,
    ) -> Result<T, ModemError> {
        tokio::time::timeout(self.config.sub_query_timeout(), call)
            .await
            .unwrap_or_else(|_| {
                Err(ModemError::Timeout {
                    operation: query.as_str(),
                    path: device.path.clone(),
                })
            })
    }
}

/// Report a failed sub-query and fall back to its unknown value.
fn absorb<T: Default>(
    query: SubQuery,
    device: &DeviceHandle,
    result: Result<T, ModemError>,
) -> T {
    result.unwrap_or_else(|err| {
        warn!(path = %device.path, %query, error = %err, "Error getting {query}");
        T::default()
    })
}

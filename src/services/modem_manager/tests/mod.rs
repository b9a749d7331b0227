//! Unit tests for the modem_manager module
//!
//! The aggregator and service run against an in-memory backend; decoders are
//! fed hand-built D-Bus dictionaries. No bus access.

#![allow(clippy::unwrap_used, clippy::panic)]


use std::{collections::HashMap, future, sync::Mutex, time::Duration};

use async_trait::async_trait;

use super::{
    BaseProperties, BearerStats, DataUsage, DeviceHandle, LteSignal, ModemBackend, ModemError,
    ModemService, ModemState, PropertyAggregator, Registration, SimIdentity, SubQuery,
    proxy::{MODEM_3GPP_INTERFACE, MODEM_INTERFACE, SIGNAL_INTERFACE},
};
use crate::config::AggregationConfig;

const MODEM_0: &str = "/org/freedesktop/ModemManager1/Modem/0";
const MODEM_1: &str = "/org/freedesktop/ModemManager1/Modem/1";
const MODEM_2: &str = "/org/freedesktop/ModemManager1/Modem/2";

#[derive(Clone)]
struct FakeModem {
    base: Option<BaseProperties>,
    registration: Option<Registration>,
    sim: Option<SimIdentity>,
    lte: Option<LteSignal>,
    bearers: Option<Vec<BearerStats>>,
    hang: Option<SubQuery>,
    delay: Duration,
}

impl FakeModem {
    fn healthy(manufacturer: &str) -> Self {
        Self {
            base: Some(BaseProperties {
                state: ModemState::Registered,
                manufacturer: Some(manufacturer.to_string()),
                model: Some("EG25".to_string()),
                device_id: Some(format!("{manufacturer}-id")),
                imei: Some("867698040000000".to_string()),
                signal_quality: 60,
                signal_recent: true,
                access_technologies: Some("lte".to_string()),
            }),
            registration: Some(Registration {
                carrier: Some("AT&T".to_string()),
                operator_code: Some("310410".to_string()),
            }),
            sim: Some(SimIdentity {
                imsi: Some("310410000000001".to_string()),
                iccid: Some("8901410000000000001".to_string()),
            }),
            lte: Some(LteSignal {
                rsrp: -95,
                rsrq: -11,
                snr: 13,
                rssi: -67,
            }),
            bearers: Some(vec![BearerStats {
                tx_bytes: 100,
                rx_bytes: 200,
            }]),
            hang: None,
            delay: Duration::ZERO,
        }
    }
}

#[derive(Default)]
struct FakeBackend {
    devices: Vec<DeviceHandle>,
    modems: HashMap<String, FakeModem>,
    fail_listing: bool,
    signal_rates: Mutex<Vec<(String, u32)>>,
}

impl FakeBackend {
    fn with_modem(mut self, path: &str, modem: FakeModem) -> Self {
        self.devices.push(modem_handle(path));
        self.modems.insert(path.to_string(), modem);
        self
    }

    fn modem(&self, device: &DeviceHandle) -> Result<&FakeModem, ModemError> {
        self.modems
            .get(&device.path)
            .ok_or_else(|| failure("unknown object"))
    }

    async fn respond(
        &self,
        device: &DeviceHandle,
        query: SubQuery,
    ) -> Result<&FakeModem, ModemError> {
        let modem = self.modem(device)?;
        if modem.hang == Some(query) {
            future::pending::<()>().await;
        }
        if !modem.delay.is_zero() {
            tokio::time::sleep(modem.delay).await;
        }
        Ok(modem)
    }
}

#[async_trait]
impl ModemBackend for FakeBackend {
    async fn list_devices(&self) -> Result<Vec<DeviceHandle>, ModemError> {
        if self.fail_listing {
            return Err(ModemError::EnumerationFailed(zbus::fdo::Error::Failed(
                "listing failed".to_string(),
            )));
        }
        Ok(self.devices.clone())
    }

    async fn base_properties(&self, device: &DeviceHandle) -> Result<BaseProperties, ModemError> {
        self.respond(device, SubQuery::Base)
            .await?
            .base
            .clone()
            .ok_or_else(|| failure("object vanished"))
    }

    async fn registration(&self, device: &DeviceHandle) -> Result<Registration, ModemError> {
        self.respond(device, SubQuery::Registration)
            .await?
            .registration
            .clone()
            .ok_or_else(|| failure("3GPP interface unavailable"))
    }

    async fn sim(&self, device: &DeviceHandle) -> Result<SimIdentity, ModemError> {
        self.respond(device, SubQuery::Sim)
            .await?
            .sim
            .clone()
            .ok_or_else(|| ModemError::NoSim {
                path: device.path.clone(),
            })
    }

    async fn lte_signal(
        &self,
        device: &DeviceHandle,
        refresh_rate_secs: u32,
    ) -> Result<LteSignal, ModemError> {
        self.signal_rates
            .lock()
            .unwrap()
            .push((device.path.clone(), refresh_rate_secs));
        self.respond(device, SubQuery::Signal)
            .await?
            .lte
            .ok_or_else(|| failure("signal setup failed"))
    }

    async fn bearer_stats(&self, device: &DeviceHandle) -> Result<Vec<BearerStats>, ModemError> {
        self.respond(device, SubQuery::Bearers)
            .await?
            .bearers
            .clone()
            .ok_or_else(|| failure("bearer listing failed"))
    }
}

fn failure(message: &str) -> ModemError {
    ModemError::DbusError(zbus::Error::Failure(message.to_string()))
}

fn modem_handle(path: &str) -> DeviceHandle {
    DeviceHandle::new(path, [MODEM_INTERFACE, MODEM_3GPP_INTERFACE, SIGNAL_INTERFACE])
}

fn config() -> AggregationConfig {
    AggregationConfig {
        sub_query_timeout_ms: 200,
        ..AggregationConfig::default()
    }
}

async fn aggregate(backend: &FakeBackend) -> Vec<super::ModemRecord> {
    PropertyAggregator::new(backend, config())
        .aggregate(&backend.devices)
        .await
}

#[tokio::test]
async fn records_follow_enumeration_order() {
    let mut slow = FakeModem::healthy("Slow");
    slow.delay = Duration::from_millis(30);
    let backend = FakeBackend::default()
        .with_modem(MODEM_2, slow)
        .with_modem(MODEM_0, FakeModem::healthy("Fast"))
        .with_modem(MODEM_1, FakeModem::healthy("Other"));

    let records = aggregate(&backend).await;

    let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, [MODEM_2, MODEM_0, MODEM_1]);
    assert_eq!(records[0].manufacturer.as_deref(), Some("Slow"));
}

#[tokio::test]
async fn sequential_mode_matches_parallel_mode() {
    let backend = FakeBackend::default()
        .with_modem(MODEM_0, FakeModem::healthy("A"))
        .with_modem(MODEM_1, FakeModem::healthy("B"));
    let sequential = AggregationConfig {
        max_concurrent_devices: 1,
        ..config()
    };

    let parallel_records = aggregate(&backend).await;
    let sequential_records = PropertyAggregator::new(&backend, sequential)
        .aggregate(&backend.devices)
        .await;

    assert_eq!(parallel_records, sequential_records);
}

#[tokio::test]
async fn healthy_modem_populates_every_field() {
    let backend = FakeBackend::default().with_modem(MODEM_0, FakeModem::healthy("Quectel"));

    let records = aggregate(&backend).await;

    let record = &records[0];
    assert_eq!(record.state, ModemState::Registered);
    assert_eq!(record.manufacturer.as_deref(), Some("Quectel"));
    assert_eq!(record.device_id.as_deref(), Some("Quectel-id"));
    assert_eq!(record.imsi.as_deref(), Some("310410000000001"));
    assert_eq!(record.iccid.as_deref(), Some("8901410000000000001"));
    assert_eq!(record.carrier.as_deref(), Some("AT&T"));
    assert_eq!(record.plmn, 310410);
    assert_eq!(record.signal_quality, 60);
    assert!(record.signal_recent);
    assert_eq!(record.lte.rsrp(), Some(-95));
    assert_eq!(record.access_technologies.as_deref(), Some("lte"));
    assert_eq!(
        record.data_usage,
        DataUsage {
            tx_bytes: 100,
            rx_bytes: 200
        }
    );
}

#[tokio::test]
async fn sim_failure_only_clears_sim_fields() {
    let mut no_sim = FakeModem::healthy("Quectel");
    no_sim.sim = None;
    let backend = FakeBackend::default().with_modem(MODEM_0, no_sim);

    let records = aggregate(&backend).await;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.imsi, None);
    assert_eq!(record.iccid, None);
    assert_eq!(record.manufacturer.as_deref(), Some("Quectel"));
    assert_eq!(record.plmn, 310410);
    assert_eq!(record.lte.snr(), Some(13));
    assert_eq!(record.data_usage.tx_bytes, 100);
}

#[tokio::test]
async fn bearer_totals_are_summed() {
    let mut modem = FakeModem::healthy("Quectel");
    modem.bearers = Some(vec![
        BearerStats {
            tx_bytes: 10,
            rx_bytes: 20,
        },
        BearerStats {
            tx_bytes: 5,
            rx_bytes: 5,
        },
        BearerStats {
            tx_bytes: 0,
            rx_bytes: 100,
        },
    ]);
    let backend = FakeBackend::default().with_modem(MODEM_0, modem);

    let records = aggregate(&backend).await;

    assert_eq!(
        records[0].data_usage,
        DataUsage {
            tx_bytes: 15,
            rx_bytes: 125
        }
    );
}

#[tokio::test]
async fn no_bearers_or_failed_listing_gives_zero_usage() {
    let mut idle = FakeModem::healthy("Idle");
    idle.bearers = Some(Vec::new());
    let mut broken = FakeModem::healthy("Broken");
    broken.bearers = None;
    let backend = FakeBackend::default()
        .with_modem(MODEM_0, idle)
        .with_modem(MODEM_1, broken);

    let records = aggregate(&backend).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].data_usage, DataUsage::default());
    assert_eq!(records[1].data_usage, DataUsage::default());
}

#[tokio::test]
async fn signal_setup_failure_leaves_sentinels() {
    let mut modem = FakeModem::healthy("Quectel");
    modem.lte = None;
    let backend = FakeBackend::default().with_modem(MODEM_0, modem);

    let records = aggregate(&backend).await;

    assert_eq!(records[0].lte, LteSignal::UNAVAILABLE);
    assert_eq!(records[0].lte.rsrp(), None);
    assert!(!records[0].lte.is_reported());
}

#[tokio::test]
async fn missing_signal_capability_skips_setup() {
    let mut backend = FakeBackend::default().with_modem(MODEM_0, FakeModem::healthy("Quectel"));
    backend.devices = vec![DeviceHandle::new(MODEM_0, [MODEM_INTERFACE])];

    let records = aggregate(&backend).await;

    assert_eq!(records[0].lte, LteSignal::UNAVAILABLE);
    assert!(backend.signal_rates.lock().unwrap().is_empty());
}

#[tokio::test]
async fn signal_refresh_rate_is_requested() {
    let backend = FakeBackend::default().with_modem(MODEM_0, FakeModem::healthy("Quectel"));

    aggregate(&backend).await;

    assert_eq!(
        *backend.signal_rates.lock().unwrap(),
        [(MODEM_0.to_string(), 10)]
    );
}

#[tokio::test]
async fn zero_reading_is_not_the_sentinel() {
    let mut modem = FakeModem::healthy("Quectel");
    modem.lte = Some(LteSignal {
        snr: 0,
        ..LteSignal::UNAVAILABLE
    });
    let backend = FakeBackend::default().with_modem(MODEM_0, modem);

    let records = aggregate(&backend).await;

    assert_eq!(records[0].lte.snr(), Some(0));
    assert_eq!(records[0].lte.rsrp(), None);
}

#[tokio::test]
async fn unparsable_or_absent_operator_code_gives_zero_plmn() {
    let mut text_code = FakeModem::healthy("Text");
    if let Some(registration) = text_code.registration.as_mut() {
        registration.operator_code = Some("unknown".to_string());
    }
    let mut no_code = FakeModem::healthy("None");
    if let Some(registration) = no_code.registration.as_mut() {
        registration.operator_code = None;
    }
    let backend = FakeBackend::default()
        .with_modem(MODEM_0, text_code)
        .with_modem(MODEM_1, no_code);

    let records = aggregate(&backend).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].plmn, 0);
    assert_eq!(records[1].plmn, 0);
}

#[tokio::test]
async fn objects_without_modem_interface_are_skipped() {
    let mut backend = FakeBackend::default()
        .with_modem(MODEM_0, FakeModem::healthy("A"))
        .with_modem(MODEM_2, FakeModem::healthy("C"));
    backend.devices.insert(
        1,
        DeviceHandle::new(
            "/org/freedesktop/ModemManager1/SIM/0",
            ["org.freedesktop.ModemManager1.Sim"],
        ),
    );

    let records = aggregate(&backend).await;

    let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, [MODEM_0, MODEM_2]);
}

#[tokio::test]
async fn failed_base_read_keeps_the_modem() {
    let mut vanished = FakeModem::healthy("Gone");
    vanished.base = None;
    let backend = FakeBackend::default()
        .with_modem(MODEM_0, FakeModem::healthy("A"))
        .with_modem(MODEM_1, vanished);

    let records = aggregate(&backend).await;

    assert_eq!(records.len(), 2);
    let record = &records[1];
    assert_eq!(record.path, MODEM_1);
    assert_eq!(record.state, ModemState::Unknown);
    assert_eq!(record.manufacturer, None);
    assert_eq!(record.signal_quality, 0);
    assert_eq!(record.imsi.as_deref(), Some("310410000000001"));
    assert_eq!(record.plmn, 310410);
    assert_eq!(record.lte.rsrp(), Some(-95));
    assert_eq!(record.data_usage.tx_bytes, 100);
}

#[tokio::test]
async fn hung_base_read_still_yields_a_record() {
    let mut slow = FakeModem::healthy("Slow");
    slow.hang = Some(SubQuery::Base);
    let backend = FakeBackend::default()
        .with_modem(MODEM_0, FakeModem::healthy("A"))
        .with_modem(MODEM_1, slow);
    let short = AggregationConfig {
        sub_query_timeout_ms: 20,
        ..config()
    };

    let records = PropertyAggregator::new(&backend, short)
        .aggregate(&backend.devices)
        .await;

    let paths: Vec<_> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, [MODEM_0, MODEM_1]);
    assert_eq!(records[1].manufacturer, None);
    assert_eq!(records[1].carrier.as_deref(), Some("AT&T"));
    assert_eq!(records[1].iccid.as_deref(), Some("8901410000000000001"));
}

#[tokio::test]
async fn failed_registration_only_clears_operator_fields() {
    let mut unregistered = FakeModem::healthy("Quectel");
    unregistered.registration = None;
    let mut hung = FakeModem::healthy("Sierra");
    hung.hang = Some(SubQuery::Registration);
    let backend = FakeBackend::default()
        .with_modem(MODEM_0, unregistered)
        .with_modem(MODEM_1, hung);
    let short = AggregationConfig {
        sub_query_timeout_ms: 20,
        ..config()
    };

    let records = PropertyAggregator::new(&backend, short)
        .aggregate(&backend.devices)
        .await;

    assert_eq!(records.len(), 2);
    for (record, manufacturer) in records.iter().zip(["Quectel", "Sierra"]) {
        assert_eq!(record.carrier, None);
        assert_eq!(record.plmn, 0);
        assert_eq!(record.manufacturer.as_deref(), Some(manufacturer));
        assert_eq!(record.state, ModemState::Registered);
        assert_eq!(record.imsi.as_deref(), Some("310410000000001"));
        assert_eq!(record.lte.snr(), Some(13));
        assert_eq!(record.data_usage.rx_bytes, 200);
    }
}

#[tokio::test]
async fn missing_3gpp_capability_skips_registration() {
    let mut backend = FakeBackend::default().with_modem(MODEM_0, FakeModem::healthy("Quectel"));
    backend.devices = vec![DeviceHandle::new(MODEM_0, [MODEM_INTERFACE])];

    let records = aggregate(&backend).await;

    assert_eq!(records[0].carrier, None);
    assert_eq!(records[0].plmn, 0);
    assert_eq!(records[0].manufacturer.as_deref(), Some("Quectel"));
}

#[tokio::test]
async fn duplicate_paths_produce_one_record() {
    let mut backend = FakeBackend::default().with_modem(MODEM_0, FakeModem::healthy("A"));
    backend.devices.push(modem_handle(MODEM_0));

    let records = aggregate(&backend).await;

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn hung_sub_query_times_out_without_losing_the_record() {
    let mut modem = FakeModem::healthy("Quectel");
    modem.hang = Some(SubQuery::Sim);
    let backend = FakeBackend::default().with_modem(MODEM_0, modem);
    let short = AggregationConfig {
        sub_query_timeout_ms: 20,
        ..config()
    };

    let records = PropertyAggregator::new(&backend, short)
        .aggregate(&backend.devices)
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].imsi, None);
    assert_eq!(records[0].manufacturer.as_deref(), Some("Quectel"));
    assert_eq!(records[0].data_usage.rx_bytes, 200);
}

#[tokio::test]
async fn repeated_aggregation_is_identical() {
    let backend = FakeBackend::default()
        .with_modem(MODEM_0, FakeModem::healthy("A"))
        .with_modem(MODEM_1, FakeModem::healthy("B"));

    let first = aggregate(&backend).await;
    let second = aggregate(&backend).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn snapshot_fails_when_no_modems_detected() {
    let service = ModemService::with_backend(FakeBackend::default(), config());

    let err = service.snapshot().await.unwrap_err();

    assert!(matches!(err, ModemError::NoModemsDetected));
    assert_eq!(err.to_string(), "No modems detected");
}

#[tokio::test]
async fn snapshot_propagates_enumeration_failure() {
    let backend = FakeBackend {
        fail_listing: true,
        ..FakeBackend::default()
    };
    let service = ModemService::with_backend(backend, config());

    let err = service.snapshot().await.unwrap_err();

    assert!(matches!(err, ModemError::EnumerationFailed(_)));
}

#[tokio::test]
async fn snapshot_after_disconnect_is_a_precondition_failure() {
    let backend = FakeBackend::default().with_modem(MODEM_0, FakeModem::healthy("A"));
    let mut service = ModemService::with_backend(backend, config());
    assert!(service.is_connected());

    service.disconnect();

    assert!(!service.is_connected());
    let err = service.snapshot().await.unwrap_err();
    assert!(matches!(err, ModemError::ManagerNotInitialized));
    assert_eq!(err.to_string(), "Modem manager not initialized");
}

#[tokio::test]
async fn snapshot_with_only_broken_modems_succeeds() {
    let mut broken = FakeModem::healthy("A");
    broken.sim = None;
    broken.lte = None;
    broken.bearers = None;
    let backend = FakeBackend::default().with_modem(MODEM_0, broken);
    let service = ModemService::with_backend(backend, config());

    let records = service.snapshot().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, MODEM_0);
    assert_eq!(records[0].imsi, None);
    assert_eq!(records[0].lte, LteSignal::UNAVAILABLE);
    assert_eq!(records[0].data_usage, DataUsage::default());
}

use async_trait::async_trait;
use futures::future;
use tracing::{debug, instrument};
use zbus::{
    Connection, fdo::ObjectManagerProxy, proxy::CacheProperties, zvariant::OwnedObjectPath,
};

use super::{
    BaseProperties, DeviceHandle, ModemBackend, ModemError, Registration, SimIdentity,
    device::sort_handles,
    proxy::{BearerProxy, MM_PATH, MM_SERVICE, Modem3gppProxy, ModemProxy, SignalProxy, SimProxy},
    types::{AccessTechnologies, BearerStats, LteSignal, ModemState},
};

/// [`ModemBackend`] talking to ModemManager over D-Bus.
///
/// Holds the bus connection and the object manager proxy. Per-object proxies
/// are created uncached for each call and dropped when the call returns, so a
/// snapshot always sees fresh values and leaves nothing behind.
pub struct ModemManagerBackend {
    connection: Connection,
    object_manager: ObjectManagerProxy<'static>,
}

impl std::fmt::Debug for ModemManagerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModemManagerBackend").finish()
    }
}

impl ModemManagerBackend {
    /// Create the ModemManager object manager on an open connection.
    ///
    /// # Errors
    /// Returns [`ModemError::ManagerCreationFailed`] if the proxy cannot be built.
    #[instrument(skip(connection))]
    pub async fn new(connection: Connection) -> Result<Self, ModemError> {
        let object_manager = object_manager(&connection)
            .await
            .map_err(ModemError::ManagerCreationFailed)?;

        Ok(Self {
            connection,
            object_manager,
        })
    }

    async fn modem(&self, path: &str) -> zbus::Result<ModemProxy<'static>> {
        ModemProxy::builder(&self.connection)
            .path(path.to_owned())?
            .cache_properties(CacheProperties::No)
            .build()
            .await
    }

    async fn modem_3gpp(&self, path: &str) -> zbus::Result<Modem3gppProxy<'static>> {
        Modem3gppProxy::builder(&self.connection)
            .path(path.to_owned())?
            .cache_properties(CacheProperties::No)
            .build()
            .await
    }

    async fn signal(&self, path: &str) -> zbus::Result<SignalProxy<'static>> {
        SignalProxy::builder(&self.connection)
            .path(path.to_owned())?
            .cache_properties(CacheProperties::No)
            .build()
            .await
    }

    async fn sim_at(&self, path: &str) -> zbus::Result<SimProxy<'static>> {
        SimProxy::builder(&self.connection)
            .path(path.to_owned())?
            .cache_properties(CacheProperties::No)
            .build()
            .await
    }

    async fn bearer(&self, path: &str) -> zbus::Result<BearerProxy<'static>> {
        BearerProxy::builder(&self.connection)
            .path(path.to_owned())?
            .cache_properties(CacheProperties::No)
            .build()
            .await
    }

    async fn stats_at(&self, path: &str) -> zbus::Result<Option<BearerStats>> {
        let bearer = self.bearer(path).await?;
        let stats = bearer.stats().await?;
        Ok(BearerStats::from_dict(&stats))
    }
}

#[async_trait]
impl ModemBackend for ModemManagerBackend {
    #[instrument(skip(self))]
    async fn list_devices(&self) -> Result<Vec<DeviceHandle>, ModemError> {
        let objects = self
            .object_manager
            .get_managed_objects()
            .await
            .map_err(ModemError::EnumerationFailed)?;

        let mut devices: Vec<DeviceHandle> = objects
            .into_iter()
            .map(|(path, interfaces)| {
                DeviceHandle::new(
                    path.to_string(),
                    interfaces.keys().map(|name| name.to_string()),
                )
            })
            .collect();
        sort_handles(&mut devices);

        debug!(count = devices.len(), "enumerated ModemManager objects");
        Ok(devices)
    }

    async fn base_properties(&self, device: &DeviceHandle) -> Result<BaseProperties, ModemError> {
        let path = device.path.as_str();
        let modem = self.modem(path).await?;

        // A vanished object fails here rather than yielding empty fields.
        let state = ModemState::from_i32(modem.state().await?);

        let (manufacturer, model, device_id, imei, signal_quality, access_technologies) =
            tokio::join!(
                modem.manufacturer(),
                modem.model(),
                modem.device_identifier(),
                modem.equipment_identifier(),
                modem.signal_quality(),
                modem.access_technologies(),
            );

        let (signal_quality, signal_recent) = signal_quality.unwrap_or_else(|err| {
            debug!(path, error = %err, "failed to fetch SignalQuality");
            (0, false)
        });

        Ok(BaseProperties {
            state,
            manufacturer: non_empty(manufacturer, path, "Manufacturer"),
            model: non_empty(model, path, "Model"),
            device_id: non_empty(device_id, path, "DeviceIdentifier"),
            imei: non_empty(imei, path, "EquipmentIdentifier"),
            signal_quality,
            signal_recent,
            access_technologies: access_technologies
                .map_err(|err| debug!(path, error = %err, "failed to fetch AccessTechnologies"))
                .ok()
                .map(AccessTechnologies::describe),
        })
    }

    async fn registration(&self, device: &DeviceHandle) -> Result<Registration, ModemError> {
        let path = device.path.as_str();
        let modem_3gpp = self.modem_3gpp(path).await?;

        let (name, code) = tokio::join!(modem_3gpp.operator_name(), modem_3gpp.operator_code());
        Ok(Registration {
            carrier: non_empty(name, path, "OperatorName"),
            operator_code: non_empty(code, path, "OperatorCode"),
        })
    }

    async fn sim(&self, device: &DeviceHandle) -> Result<SimIdentity, ModemError> {
        let modem = self.modem(&device.path).await?;
        let sim_path = modem.sim().await?;
        let Some(sim_path) = sim_object(&sim_path) else {
            return Err(ModemError::NoSim {
                path: device.path.clone(),
            });
        };

        let sim = self.sim_at(sim_path).await?;
        let (imsi, iccid) = tokio::join!(sim.imsi(), sim.sim_identifier());

        Ok(SimIdentity {
            imsi: non_empty(imsi, sim_path, "Imsi"),
            iccid: non_empty(iccid, sim_path, "SimIdentifier"),
        })
    }

    async fn lte_signal(
        &self,
        device: &DeviceHandle,
        refresh_rate_secs: u32,
    ) -> Result<LteSignal, ModemError> {
        let signal = self.signal(&device.path).await?;
        signal.setup(refresh_rate_secs).await?;
        let lte = signal.lte().await?;

        Ok(LteSignal::from_dict(&lte))
    }

    async fn bearer_stats(&self, device: &DeviceHandle) -> Result<Vec<BearerStats>, ModemError> {
        let modem = self.modem(&device.path).await?;
        let bearers = modem.list_bearers().await?;

        let stats =
            future::join_all(bearers.iter().map(|bearer| self.stats_at(bearer.as_str()))).await;

        Ok(bearers
            .iter()
            .zip(stats)
            .filter_map(|(bearer, stats)| match stats {
                Ok(stats) => stats,
                Err(err) => {
                    debug!(bearer = %bearer, error = %err, "skipping bearer with unreadable stats");
                    None
                }
            })
            .collect())
    }
}

/// Create object manager for tracking DBus modem objects
async fn object_manager(connection: &Connection) -> zbus::Result<ObjectManagerProxy<'static>> {
    ObjectManagerProxy::builder(connection)
        .destination(MM_SERVICE)?
        .path(MM_PATH)?
        .build()
        .await
}

/// ModemManager reports unknown strings as empty; both that and a failed read
/// become `None`.
pub(crate) fn non_empty(
    result: zbus::Result<String>,
    path: &str,
    property: &str,
) -> Option<String> {
    match result {
        Ok(value) if !value.is_empty() => Some(value),
        Ok(_) => None,
        Err(err) => {
            debug!(path, property, error = %err, "failed to fetch property");
            None
        }
    }
}

/// Path of the SIM object, or `None` for `/`, ModemManager's "no SIM".
pub(crate) fn sim_object(path: &OwnedObjectPath) -> Option<&str> {
    match path.as_str() {
        "/" => None,
        sim => Some(sim),
    }
}

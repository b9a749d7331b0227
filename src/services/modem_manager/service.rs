use tracing::{info, instrument};
use zbus::Connection;

use crate::config::AggregationConfig;

use super::{
    DeviceHandle, ModemBackend, ModemError, ModemManagerBackend, ModemRecord, PropertyAggregator,
};

/// Entry point for taking modem snapshots.
///
/// Owns the backend for its whole lifetime. After [`disconnect`](Self::disconnect)
/// every call fails with [`ModemError::ManagerNotInitialized`]; there is no
/// reconnection.
#[derive(Debug)]
pub struct ModemService<B: ModemBackend = ModemManagerBackend> {
    backend: Option<B>,
    config: AggregationConfig,
}

impl ModemService {
    /// Connect to the system bus and ModemManager.
    ///
    /// # Errors
    /// Returns [`ModemError::ConnectionFailed`] if the system bus is unreachable,
    /// or [`ModemError::ManagerCreationFailed`] if the object manager cannot be
    /// created.
    #[instrument(skip(config))]
    pub async fn connect(config: AggregationConfig) -> Result<Self, ModemError> {
        let connection = Connection::system()
            .await
            .map_err(ModemError::ConnectionFailed)?;
        let backend = ModemManagerBackend::new(connection).await?;

        info!("Connected to ModemManager");
        Ok(Self::with_backend(backend, config))
    }
}

impl<B: ModemBackend> ModemService<B> {
    /// Wrap an already connected backend.
    pub fn with_backend(backend: B, config: AggregationConfig) -> Self {
        Self {
            backend: Some(backend),
            config,
        }
    }

    /// Release the backend and everything it holds.
    pub fn disconnect(&mut self) {
        if self.backend.take().is_some() {
            info!("Disconnected from ModemManager");
        }
    }

    /// Whether a backend is still held.
    pub fn is_connected(&self) -> bool {
        self.backend.is_some()
    }

    /// Enumerate the objects exported by the modem service.
    ///
    /// # Errors
    /// Returns [`ModemError::ManagerNotInitialized`] after disconnect,
    /// [`ModemError::EnumerationFailed`] if listing fails, and
    /// [`ModemError::NoModemsDetected`] if nothing is exported.
    pub async fn devices(&self) -> Result<Vec<DeviceHandle>, ModemError> {
        let backend = self.backend()?;
        let devices = backend.list_devices().await?;
        if devices.is_empty() {
            return Err(ModemError::NoModemsDetected);
        }

        Ok(devices)
    }

    /// Take a snapshot of every modem.
    ///
    /// Fails only on the preconditions listed for [`devices`](Self::devices).
    /// Per-modem and per-field failures are logged and absorbed into the records.
    ///
    /// # Errors
    /// Same as [`devices`](Self::devices).
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Vec<ModemRecord>, ModemError> {
        let devices = self.devices().await?;
        let backend = self.backend()?;

        let records = PropertyAggregator::new(backend, self.config)
            .aggregate(&devices)
            .await;

        info!(devices = devices.len(), modems = records.len(), "Snapshot complete");
        Ok(records)
    }

    fn backend(&self) -> Result<&B, ModemError> {
        self.backend.as_ref().ok_or(ModemError::ManagerNotInitialized)
    }
}

//! modem-snapshot - best-effort snapshots of cellular modems over D-Bus.
//!
//! Queries ModemManager for every modem it exports and builds one
//! [`ModemRecord`](services::modem_manager::ModemRecord) per modem with its
//! identity, registration, signal and data usage. Each remote call is allowed
//! to fail on its own: a missing SIM or an unresponsive signal interface leaves
//! those fields unknown without dropping the modem.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use modem_snapshot::{config::Config, services::modem_manager::ModemService};
//!
//! # async fn run() -> modem_snapshot::Result<()> {
//! let config = Config::load()?;
//! let service = ModemService::connect(config.aggregation).await?;
//!
//! for record in service.snapshot().await? {
//!     println!("{}: {}", record.path, record.state);
//! }
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface of the binary.
pub mod cli;

/// System services queried over D-Bus.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{Result, SnapshotError};

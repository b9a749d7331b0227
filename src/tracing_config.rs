use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{GeneralConfig, LogFormat};

/// Environment variable selecting the log format, overriding the config file.
pub const LOG_FORMAT_ENV: &str = "MODEM_SNAPSHOT_LOG_FORMAT";

/// Initialize tracing for the application
///
/// Uses RUST_LOG environment variable if set, otherwise the configured level.
/// The format comes from `MODEM_SNAPSHOT_LOG_FORMAT` if set, otherwise from the
/// config. Everything is written to stderr so stdout carries only the report.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init(general: &GeneralConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_level.to_string()));

    let format = env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|name| LogFormat::from_name(&name))
        .unwrap_or(general.log_format);

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
        LogFormat::Compact => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_thread_ids(true)
                        .with_thread_names(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}

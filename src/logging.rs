use crate::config::GeohashConfig;
use crate::error::{Error, Result};
use tracing::Level;
use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Install a global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Fails if a global subscriber
/// has already been set.
pub fn init_logging(level: Level, json_output: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lightning_geohash={},warn", level)));

    let installed = if json_output {
        let fmt_layer = fmt::layer()
            .json()
            .with_timer(SystemTime)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true);

        Registry::default().with(env_filter).with(fmt_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_timer(SystemTime)
            .with_target(true)
            .with_thread_names(true);

        Registry::default().with(env_filter).with(fmt_layer).try_init()
    };

    installed.map_err(|e| Error::Config(format!("Logging already initialized: {}", e)))
}

pub fn init_from_config(config: &GeohashConfig) -> Result<()> {
    init_logging(config.log_level.into(), config.json_logs)
}

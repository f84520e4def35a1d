// Logging module - Logging infrastructure
use crate::domain::error::{MorseComError, MorseComResult};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging system
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to
/// this crate and warnings from everything else. Logs go to stderr so
/// they never mix with command output.
pub fn init_logging(log_level: &str, verbose: bool) -> MorseComResult<()> {
    let level = if verbose { "debug" } else { log_level };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("morsecom={},warn", level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| MorseComError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;

    Ok(())
}

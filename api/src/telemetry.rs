//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured level when set.

use sigil_shared::{LogFormat, LoggingConfig};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Install the global subscriber described by `config`
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);
    let source = config.source_location;

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_file(source).with_line_number(source))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_file(source).with_line_number(source))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_file(source).with_line_number(source))
            .try_init(),
    }
}

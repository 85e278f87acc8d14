use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::AppConfig;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Production logs are JSON lines,
/// everything else is human readable. Installing twice is a no-op.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = fmt().with_env_filter(filter).with_target(false);

    let result = if config.is_production() {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}

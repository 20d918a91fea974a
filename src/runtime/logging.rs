use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// `RUST_LOG` wins, then `--verbose`, then `log.level`.
pub fn init(settings: &LogSettings, verbose: bool) {
    let fallback = if verbose { "debug" } else { settings.level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_target(false)
        .init();
}

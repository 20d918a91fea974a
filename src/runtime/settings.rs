use crate::cli::Cli;
use crate::config;

/// Load settings and apply command line overrides.
///
/// Config is optional: a load or validation failure falls back to defaults and
/// is returned as a message to log once logging is up.
pub fn load_settings(cli: &Cli) -> (config::Settings, Option<String>) {
    let (mut settings, problem) = match config::Settings::load(cli.config.as_deref()) {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (
                config::Settings::default(),
                Some(format!("{e}, using defaults")),
            ),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    };

    if let Some(kind) = cli.player {
        settings.player.kind = kind;
    }
    (settings, problem)
}

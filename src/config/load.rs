use std::{
    env,
    path::{Path, PathBuf},
};

use tracing_subscriber::EnvFilter;

use super::schema::Settings;
use crate::error::{Error, Result};

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, lets environment variables
/// (prefix `ADMUTE__`) override it and falls back to struct defaults.
impl Settings {
    /// Load settings from the given file (or the resolved default path) and environment.
    pub fn load(path: Option<&Path>) -> std::result::Result<Self, ::config::ConfigError> {
        let config_path = path.map(Path::to_path_buf).or_else(resolve_config_path);

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("ADMUTE")
                .separator("__")
                .try_parsing(true)
                .list_separator(" ")
                .with_list_parse_key("audio.list_command")
                .with_list_parse_key("audio.stream_mute_command")
                .with_list_parse_key("audio.master_mute_command"),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<()> {
        let commands = [
            ("audio.list_command", &self.audio.list_command),
            ("audio.stream_mute_command", &self.audio.stream_mute_command),
            ("audio.master_mute_command", &self.audio.master_mute_command),
        ];
        for (key, argv) in commands {
            if argv.first().is_none_or(|program| program.trim().is_empty()) {
                return Err(Error::InvalidConfig(format!("{key} must name a program")));
            }
        }
        if let Err(e) = EnvFilter::try_new(&self.log.level) {
            return Err(Error::InvalidConfig(format!("log.level: {e}")));
        }
        Ok(())
    }
}

/// Resolve the config path from `ADMUTE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("ADMUTE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/admute/config.toml`
/// or `~/.config/admute/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("admute").join("config.toml"))
}

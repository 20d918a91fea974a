use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/admute/config.toml` or `~/.config/admute/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags (`--player`, `--verbose`)
/// 2) Environment variables (prefix `ADMUTE__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub audio: AudioSettings,
    pub scheduler: SchedulerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Which player to watch.
    pub kind: PlayerKind,
    /// Override for the player's MPRIS bus name.
    pub bus_name: Option<String>,
    /// Override for the binary name the audio server reports for the player's streams.
    pub binary_name: Option<String>,
    /// Extra placeholder artist strings treated as ads, on top of the built-in locales.
    ///
    /// Only used by players classified by artist string.
    pub extra_ad_artists: Vec<String>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    #[default]
    Spotify,
    #[serde(alias = "youtubemusic", alias = "youtube_music", alias = "ytmusic")]
    #[value(alias = "youtubemusic")]
    YoutubeMusic,
}

/// External commands used to inspect and mute audio streams.
///
/// Each command is a program followed by its arguments. Placeholders:
/// `{index}` stream index, `{mute}` `1`/`0`, `{switch}` `off`/`on`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub list_command: Vec<String>,
    pub stream_mute_command: Vec<String>,
    pub master_mute_command: Vec<String>,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            list_command: argv(&["pacmd", "list-sink-inputs"]),
            stream_mute_command: argv(&["pacmd", "set-sink-input-mute", "{index}", "{mute}"]),
            master_mute_command: argv(&["amixer", "-q", "-D", "pulse", "sset", "Master", "{switch}"]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Drop delayed toggles that a newer mute decision has superseded.
    pub drop_superseded: bool,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            drop_superseded: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

use std::path::PathBuf;

use clap::Parser;

use crate::config::PlayerKind;

#[derive(Debug, Parser)]
#[command(name = "admute", version, about = "Mute a media player's audio while it plays ads")]
pub struct Cli {
    /// Player to watch (overrides `player.kind` from the config file)
    #[arg(short, long, value_enum)]
    pub player: Option<PlayerKind>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

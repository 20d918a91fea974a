//! Settings for the watched player, the audio-server commands, the
//! toggle scheduler and logging.
//!
//! Layers, lowest first: struct defaults, the TOML file (`--config`, else
//! `ADMUTE_CONFIG_PATH`, else the XDG location), then `ADMUTE__SECTION__KEY`
//! environment variables.

mod load;
mod schema;

pub use schema::*;

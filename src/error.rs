use std::io;
use std::process::ExitStatus;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),

    #[error("D-Bus daemon error: {0}")]
    Daemon(#[from] zbus::fdo::Error),

    #[error("invalid bus name: {0}")]
    Name(#[from] zbus::names::Error),

    #[error("malformed variant: {0}")]
    Variant(#[from] zvariant::Error),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("{0} command is empty")]
    EmptyCommand(&'static str),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Whether this is the daemon reporting that nobody owns the requested name,
    /// i.e. the player is simply not running.
    pub fn is_name_absent(&self) -> bool {
        match self {
            Error::Daemon(zbus::fdo::Error::NameHasNoOwner(_)) => true,
            Error::Bus(zbus::Error::FDO(e)) => matches!(**e, zbus::fdo::Error::NameHasNoOwner(_)),
            _ => false,
        }
    }
}

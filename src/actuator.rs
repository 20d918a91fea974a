//! Fire-and-forget mute commands against the audio server.

use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::error::Error;

/// Side effects the scheduler is allowed to cause. Results are never reported back.
pub trait Actuator {
    fn mute_stream(&self, index: u32);
    fn unmute_stream(&self, index: u32);
    fn mute_master(&self);
    fn unmute_master(&self);
}

/// Runs configured command lines, substituting `{index}`, `{mute}` and `{switch}`.
///
/// Commands go to a single worker thread and run one at a time in the order
/// they were issued. The worker exits once the actuator is dropped.
pub struct CommandActuator {
    stream_mute: Vec<String>,
    master_mute: Vec<String>,
    commands: Sender<Vec<String>>,
}

impl CommandActuator {
    pub fn new(stream_mute: Vec<String>, master_mute: Vec<String>) -> Self {
        Self::with_runner(stream_mute, master_mute, run)
    }

    fn with_runner<F>(stream_mute: Vec<String>, master_mute: Vec<String>, runner: F) -> Self
    where
        F: Fn(&[String]) -> Result<(), Error> + Send + 'static,
    {
        let (commands, rx) = mpsc::channel();
        thread::spawn(move || command_worker(rx, runner));
        Self {
            stream_mute,
            master_mute,
            commands,
        }
    }

    fn set_stream_mute(&self, index: u32, mute: bool) {
        self.submit(expand(&self.stream_mute, Some(index), mute));
    }

    fn set_master_mute(&self, mute: bool) {
        self.submit(expand(&self.master_mute, None, mute));
    }

    fn submit(&self, argv: Vec<String>) {
        if self.commands.send(argv).is_err() {
            warn!("audio command worker is gone, command dropped");
        }
    }
}

impl Actuator for CommandActuator {
    fn mute_stream(&self, index: u32) {
        self.set_stream_mute(index, true);
    }

    fn unmute_stream(&self, index: u32) {
        self.set_stream_mute(index, false);
    }

    fn mute_master(&self) {
        self.set_master_mute(true);
    }

    fn unmute_master(&self) {
        self.set_master_mute(false);
    }
}

pub(crate) fn expand(template: &[String], index: Option<u32>, mute: bool) -> Vec<String> {
    let index = index.map(|i| i.to_string()).unwrap_or_default();
    let flag = if mute { "1" } else { "0" };
    let switch = if mute { "off" } else { "on" };
    template
        .iter()
        .map(|arg| {
            arg.replace("{index}", &index)
                .replace("{mute}", flag)
                .replace("{switch}", switch)
        })
        .collect()
}

/// Run queued commands in order until every sender is gone. Failures are
/// logged and the next command still runs.
fn command_worker<F>(rx: Receiver<Vec<String>>, runner: F)
where
    F: Fn(&[String]) -> Result<(), Error>,
{
    for argv in rx {
        if let Err(e) = runner(&argv) {
            warn!(error = %e, "audio command failed");
        }
    }
    debug!("audio command worker stopped");
}

fn run(argv: &[String]) -> Result<(), Error> {
    let (program, args) = argv.split_first().ok_or(Error::EmptyCommand("mute"))?;
    let command = argv.join(" ");
    debug!(%command, "running audio command");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;
    if !status.success() {
        return Err(Error::CommandFailed { command, status });
    }
    Ok(())
}

#[cfg(test)]
mod tests;

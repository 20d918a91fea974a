//! Test doubles for the audio-server side of the crate.

use std::cell::RefCell;
use std::rc::Rc;

use crate::actuator::Actuator;
use crate::error::{Error, Result};
use crate::sinks::SinkLister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Stream { index: u32, mute: bool },
    Master { mute: bool },
}

/// Records actuator calls; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Actuator for Recorder {
    fn mute_stream(&self, index: u32) {
        self.push(Call::Stream { index, mute: true });
    }

    fn unmute_stream(&self, index: u32) {
        self.push(Call::Stream { index, mute: false });
    }

    fn mute_master(&self) {
        self.push(Call::Master { mute: true });
    }

    fn unmute_master(&self) {
        self.push(Call::Master { mute: false });
    }
}

/// Serves a listing that tests can swap between notifications; `None` fails.
#[derive(Debug, Clone, Default)]
pub struct ScriptedListing {
    listing: Rc<RefCell<Option<String>>>,
}

impl ScriptedListing {
    pub fn new(listing: &str) -> Self {
        let scripted = Self::default();
        scripted.set(Some(listing));
        scripted
    }

    pub fn set(&self, listing: Option<&str>) {
        *self.listing.borrow_mut() = listing.map(str::to_string);
    }
}

impl SinkLister for ScriptedListing {
    fn list(&self) -> Result<String> {
        self.listing
            .borrow()
            .clone()
            .ok_or(Error::EmptyCommand("scripted listing"))
    }
}

/// A listing stanza for one stream of `binary`.
pub fn stanza(index: u32, binary: &str, latency_ms: f64) -> String {
    format!(
        "    index: {index}\n\tcurrent latency: {latency_ms:.2} ms\n\tproperties:\n\t\tapplication.process.id = \"100\"\n\t\tapplication.process.binary = \"{binary}\"\n"
    )
}

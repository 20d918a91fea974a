//! Audio stream inventory parsed from the audio server's sink-input listing.

use std::process::Command;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// One playback stream owned by the watched application.
///
/// Only valid for the listing it was parsed from: the audio server reuses
/// indices once a stream goes away.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkRecord {
    pub index: u32,
    pub process_id: Option<u32>,
    pub binary: String,
    pub latency_ms: f64,
}

impl SinkRecord {
    /// How long already-buffered audio keeps playing on this stream.
    pub fn delay(&self) -> Duration {
        Duration::from_micros((self.latency_ms * 1000.0).round() as u64)
    }
}

/// Source of the raw sink-input listing.
pub trait SinkLister {
    fn list(&self) -> Result<String>;
}

/// Runs a listing command such as `pacmd list-sink-inputs` and returns its stdout.
pub struct CommandSinkLister {
    argv: Vec<String>,
}

impl CommandSinkLister {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl SinkLister for CommandSinkLister {
    fn list(&self) -> Result<String> {
        let (program, args) = self
            .argv
            .split_first()
            .ok_or(Error::EmptyCommand("sink listing"))?;
        let command = self.argv.join(" ");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                command,
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// List the current streams and keep those belonging to `binary`.
pub fn discover(lister: &impl SinkLister, binary: &str) -> Result<Vec<SinkRecord>> {
    let listing = lister.list()?;
    let sinks = parse_sink_inputs(&listing, binary);
    debug!(binary, count = sinks.len(), ?sinks, "discovered sinks");
    Ok(sinks)
}

/// Parse a `pacmd list-sink-inputs` style listing.
///
/// Stanzas start at an `index: N` line. Anything before the first stanza and
/// stanzas whose index is not an integer are skipped. A stanza is kept only if
/// its `application.process.binary` equals `binary` and it reports a usable
/// `current latency`. Records come back in listing order.
pub fn parse_sink_inputs(listing: &str, binary: &str) -> Vec<SinkRecord> {
    let mut sinks = Vec::new();

    for stanza in stanzas(listing) {
        let Ok(index) = stanza.index.trim().parse::<u32>() else {
            continue;
        };
        let fields = StanzaFields::scan(&stanza.lines);

        if fields.binary.as_deref() != Some(binary) {
            continue;
        }
        let Some(latency_ms) = fields.latency_ms.filter(|l| l.is_finite() && *l >= 0.0) else {
            warn!(index, binary, "sink input has no usable latency, skipping");
            continue;
        };

        sinks.push(SinkRecord {
            index,
            process_id: fields.process_id,
            binary: binary.to_string(),
            latency_ms,
        });
    }

    sinks
}

struct Stanza<'a> {
    index: &'a str,
    lines: Vec<&'a str>,
}

fn stanzas(listing: &str) -> Vec<Stanza<'_>> {
    let mut out: Vec<Stanza<'_>> = Vec::new();
    for line in listing.lines() {
        // The default entry is marked `* index: N` in sink listings.
        let marker = line.trim_start().trim_start_matches('*').trim_start();
        if let Some(index) = marker.strip_prefix("index: ") {
            out.push(Stanza {
                index,
                lines: Vec::new(),
            });
        } else if let Some(current) = out.last_mut() {
            current.lines.push(line);
        }
    }
    out
}

#[derive(Default)]
struct StanzaFields {
    process_id: Option<u32>,
    binary: Option<String>,
    latency_ms: Option<f64>,
}

impl StanzaFields {
    fn scan(lines: &[&str]) -> Self {
        let mut fields = Self::default();
        for line in lines {
            if let Some(rest) = after(line, "application.process.id = ") {
                fields.process_id = quoted(rest).and_then(|v| v.parse().ok());
            } else if let Some(rest) = after(line, "application.process.binary = ") {
                fields.binary = quoted(rest).map(str::to_string);
            } else if let Some(rest) = after(line, "current latency: ") {
                fields.latency_ms = rest
                    .split(" ms")
                    .next()
                    .and_then(|v| v.trim().parse().ok());
            }
        }
        fields
    }
}

fn after<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.find(key).map(|at| &line[at + key.len()..])
}

fn quoted(value: &str) -> Option<&str> {
    value.split('"').nth(1)
}

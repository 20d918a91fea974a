//! Latency-aligned mute/unmute toggles.
//!
//! Each stream is toggled only after its own reported latency has elapsed so
//! audio already queued in the server is not clipped. Delays run in parallel
//! and complete in any order; the event loop drives them through
//! [`ToggleScheduler::next_commit`].

use std::future;

use async_io::Timer;
use futures_util::future::{FutureExt, LocalBoxFuture};
use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info};

use crate::actuator::Actuator;
use crate::sinks::SinkRecord;

/// A delayed toggle for one stream, waiting for its latency to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToggle {
    pub sink_index: u32,
    pub mute: bool,
    /// Scheduling call this toggle belongs to.
    pub generation: u64,
}

/// What happened to a toggle whose delay elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The mute command was issued.
    Applied(PendingToggle),
    /// A newer scheduling call replaced this one; nothing was issued.
    Superseded(PendingToggle),
}

pub struct ToggleScheduler<A> {
    actuator: A,
    pending: FuturesUnordered<LocalBoxFuture<'static, PendingToggle>>,
    generation: u64,
    drop_superseded: bool,
}

impl<A: Actuator> ToggleScheduler<A> {
    /// With `drop_superseded` off, toggles from older decisions still fire
    /// after a newer decision has been scheduled.
    pub fn new(actuator: A, drop_superseded: bool) -> Self {
        Self {
            actuator,
            pending: FuturesUnordered::new(),
            generation: 0,
            drop_superseded,
        }
    }

    /// Schedule `mute` for every sink after that sink's latency.
    ///
    /// Without sinks the master output is toggled right away. Returns without
    /// waiting for any delay.
    pub fn schedule_toggle(&mut self, sinks: &[SinkRecord], mute: bool) {
        self.generation += 1;
        let action = action(mute);

        if sinks.is_empty() {
            info!("{action} master");
            if mute {
                self.actuator.mute_master();
            } else {
                self.actuator.unmute_master();
            }
            return;
        }

        for sink in sinks {
            info!(
                sink = sink.index,
                latency_ms = sink.latency_ms,
                "{action} sink after its latency"
            );
            let toggle = PendingToggle {
                sink_index: sink.index,
                mute,
                generation: self.generation,
            };
            // Deadline is fixed now, not when the loop first polls it.
            let timer = Timer::after(sink.delay());
            self.pending.push(
                async move {
                    timer.await;
                    toggle
                }
                .boxed_local(),
            );
        }
    }

    /// Toggles still waiting on their delay.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Wait for the next delay to elapse and commit that toggle.
    ///
    /// Never resolves while nothing is in flight, so it can sit in a `select!`
    /// next to the bus streams.
    pub async fn next_commit(&mut self) -> Commit {
        let Some(toggle) = self.pending.next().await else {
            return future::pending().await;
        };

        if self.drop_superseded && toggle.generation != self.generation {
            debug!(
                sink = toggle.sink_index,
                generation = toggle.generation,
                current = self.generation,
                "dropping superseded toggle"
            );
            return Commit::Superseded(toggle);
        }

        info!(sink = toggle.sink_index, "{} sink", action(toggle.mute));
        if toggle.mute {
            self.actuator.mute_stream(toggle.sink_index);
        } else {
            self.actuator.unmute_stream(toggle.sink_index);
        }
        Commit::Applied(toggle)
    }

    /// Commit everything in flight, in completion order.
    #[cfg(test)]
    pub async fn drain(&mut self) -> Vec<Commit> {
        let mut commits = Vec::new();
        while !self.pending.is_empty() {
            commits.push(self.next_commit().await);
        }
        commits
    }
}

fn action(mute: bool) -> &'static str {
    if mute { "mute" } else { "unmute" }
}

//! Session-bus side: follows one MPRIS player across restarts and feeds its
//! track changes to the controller.

use futures_util::{FutureExt, StreamExt, future, select};
use tracing::{debug, info, warn};
use zbus::Connection;
use zbus::fdo::{DBusProxy, NameOwnerChanged, PropertiesChanged, PropertiesChangedStream, PropertiesProxy};
use zbus::names::BusName;
use zbus::proxy::CacheProperties;

use crate::actuator::Actuator;
use crate::controller::TrackChangeController;
use crate::error::Result;
use crate::scheduler::Commit;
use crate::sinks::SinkLister;

pub const MPRIS_PATH: &str = "/org/mpris/MediaPlayer2";

enum WatchEvent {
    OwnerChanged(NameOwnerChanged),
    BusClosed,
    TrackChanged(PropertiesChanged),
    PlayerStreamEnded,
    Committed(Commit),
}

/// Owns the bus connection and the event loop for one player.
pub struct PlayerWatcher<L, A> {
    connection: Connection,
    dbus: DBusProxy<'static>,
    controller: TrackChangeController<L, A>,
    track_changes: Option<PropertiesChangedStream>,
}

impl<L: SinkLister, A: Actuator> PlayerWatcher<L, A> {
    pub async fn connect(controller: TrackChangeController<L, A>) -> Result<Self> {
        let connection = Connection::session().await?;
        let dbus = DBusProxy::new(&connection).await?;
        Ok(Self {
            connection,
            dbus,
            controller,
            track_changes: None,
        })
    }

    fn bus_name(&self) -> &str {
        &self.controller.profile().bus_name
    }

    /// Run until the bus goes away or fails. Absence of the player is not an error.
    pub async fn run(mut self) -> Result<()> {
        let bus_name = self.bus_name().to_string();
        let mut owner_changes = self
            .dbus
            .receive_name_owner_changed_with_args(&[(0, bus_name.as_str())])
            .await?;

        let attached = self.attach_current_owner().await;
        if !tolerate_absent_player(attached)? {
            info!("{bus_name} is not running yet, waiting for it");
        }

        loop {
            let event = select! {
                change = owner_changes.next().fuse() => match change {
                    Some(change) => WatchEvent::OwnerChanged(change),
                    None => WatchEvent::BusClosed,
                },
                signal = next_track_change(&mut self.track_changes).fuse() => match signal {
                    Some(signal) => WatchEvent::TrackChanged(signal),
                    None => WatchEvent::PlayerStreamEnded,
                },
                commit = self.controller.next_commit().fuse() => WatchEvent::Committed(commit),
            };

            match event {
                WatchEvent::OwnerChanged(change) => self.on_owner_changed(change).await?,
                WatchEvent::BusClosed => {
                    warn!("session bus closed the name owner stream");
                    return Ok(());
                }
                WatchEvent::TrackChanged(signal) => self.on_properties_changed(signal),
                WatchEvent::PlayerStreamEnded => {
                    debug!("player signal stream ended");
                    self.track_changes = None;
                }
                WatchEvent::Committed(commit) => {
                    debug!(?commit, in_flight = self.controller.in_flight(), "toggle committed");
                }
            }
        }
    }

    async fn attach_current_owner(&mut self) -> Result<()> {
        let name = BusName::try_from(self.bus_name())?;
        let owner = self.dbus.get_name_owner(name).await?;
        self.attach(owner.to_string()).await
    }

    /// Subscribe to `PropertiesChanged` from the given unique name. The
    /// subscription lapses on its own once that connection leaves the bus.
    async fn attach(&mut self, owner: String) -> Result<()> {
        let proxy = PropertiesProxy::builder(&self.connection)
            .destination(owner.clone())?
            .path(MPRIS_PATH)?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        self.track_changes = Some(proxy.receive_properties_changed().await?);
        info!(owner = %owner, "watching {}", self.bus_name());
        Ok(())
    }

    async fn on_owner_changed(&mut self, change: NameOwnerChanged) -> Result<()> {
        let args = change.args()?;
        let new_owner = (**args.new_owner()).as_ref().map(|owner| owner.as_str());

        match owner_action(self.bus_name(), args.name().as_str(), new_owner) {
            OwnerAction::Ignore => Ok(()),
            OwnerAction::Attach(owner) => {
                info!("{} appeared", self.bus_name());
                let attached = self.attach(owner).await;
                if !tolerate_absent_player(attached)? {
                    info!("{} left again before it could be watched", self.bus_name());
                }
                Ok(())
            }
            OwnerAction::Detach => {
                // Mute state is left alone; the next track change decides.
                info!("{} went away", self.bus_name());
                self.track_changes = None;
                Ok(())
            }
        }
    }

    fn on_properties_changed(&mut self, signal: PropertiesChanged) {
        match signal.args() {
            Ok(args) => {
                let transition = self.controller.handle_properties_changed(args.changed_properties());
                debug!(
                    ?transition,
                    is_ad = self.controller.previous_is_ad(),
                    "handled properties change"
                );
            }
            Err(e) => warn!(error = %e, "ignoring malformed PropertiesChanged signal"),
        }
    }
}

/// What a `NameOwnerChanged` signal means for the watched player.
#[derive(Debug, PartialEq, Eq)]
enum OwnerAction {
    /// Signal for some other name.
    Ignore,
    /// Subscribe to the new owner's unique name.
    Attach(String),
    /// The player left the bus.
    Detach,
}

fn owner_action(watched: &str, name: &str, new_owner: Option<&str>) -> OwnerAction {
    if name != watched {
        return OwnerAction::Ignore;
    }
    match new_owner {
        Some(owner) if !owner.is_empty() => OwnerAction::Attach(owner.to_string()),
        _ => OwnerAction::Detach,
    }
}

/// `Ok(false)` when the player simply has no owner on the bus; other
/// failures are passed through.
fn tolerate_absent_player(attached: Result<()>) -> Result<bool> {
    match attached {
        Ok(()) => Ok(true),
        Err(e) if e.is_name_absent() => Ok(false),
        Err(e) => Err(e),
    }
}

async fn next_track_change(stream: &mut Option<PropertiesChangedStream>) -> Option<PropertiesChanged> {
    match stream {
        Some(stream) => stream.next().await,
        None => future::pending().await,
    }
}

//! Ad/normal state machine fed by track-change notifications.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use zvariant::Value;

use crate::actuator::Actuator;
use crate::metadata::{TrackMetadata, changed_metadata};
use crate::player::PlayerProfile;
use crate::scheduler::{Commit, ToggleScheduler};
use crate::sinks::{SinkLister, discover};

/// Action taken for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Not a track change, or the sink listing could not be read.
    Ignored,
    /// Same ad state as the previous track.
    Unchanged,
    Mute,
    Unmute,
}

pub struct TrackChangeController<L, A> {
    profile: PlayerProfile,
    lister: L,
    scheduler: ToggleScheduler<A>,
    previous_is_ad: bool,
}

impl<L: SinkLister, A: Actuator> TrackChangeController<L, A> {
    pub fn new(profile: PlayerProfile, lister: L, scheduler: ToggleScheduler<A>) -> Self {
        Self {
            profile,
            lister,
            scheduler,
            previous_is_ad: false,
        }
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn previous_is_ad(&self) -> bool {
        self.previous_is_ad
    }

    /// Handle the changed-properties mapping of a `PropertiesChanged` signal.
    pub fn handle_properties_changed(&mut self, changed: &HashMap<&str, Value<'_>>) -> Transition {
        match changed_metadata(changed) {
            Ok(Some(metadata)) => self.handle_track_change(&metadata),
            Ok(None) => {
                debug!("properties changed without track metadata");
                Transition::Ignored
            }
            Err(e) => {
                warn!(error = %e, "ignoring malformed track metadata");
                Transition::Ignored
            }
        }
    }

    pub fn handle_track_change(&mut self, metadata: &TrackMetadata) -> Transition {
        // Ads may open their own streams, so the inventory is refreshed every time.
        let sinks = match discover(&self.lister, &self.profile.binary_name) {
            Ok(sinks) => sinks,
            Err(e) => {
                warn!(error = %e, "could not list audio streams, skipping track change");
                return Transition::Ignored;
            }
        };

        let is_ad = self.profile.classify(metadata);
        info!(
            trackid = metadata.track_id.as_deref().unwrap_or_default(),
            title = metadata.title.as_deref().unwrap_or_default(),
            artist = %metadata.artist_line(),
            album = metadata.album.as_deref().unwrap_or_default(),
            is_ad,
            "[{}] playing new track",
            self.profile.binary_name
        );

        let transition = match (self.previous_is_ad, is_ad) {
            (false, true) => {
                info!("ad starting, muting");
                self.scheduler.schedule_toggle(&sinks, true);
                Transition::Mute
            }
            (true, false) => {
                info!("ad over, unmuting");
                self.scheduler.schedule_toggle(&sinks, false);
                Transition::Unmute
            }
            _ => Transition::Unchanged,
        };
        self.previous_is_ad = is_ad;
        transition
    }

    /// Drive delayed toggles; see [`ToggleScheduler::next_commit`].
    pub async fn next_commit(&mut self) -> Commit {
        self.scheduler.next_commit().await
    }

    pub fn in_flight(&self) -> usize {
        self.scheduler.in_flight()
    }

    #[cfg(test)]
    pub fn scheduler_mut(&mut self) -> &mut ToggleScheduler<A> {
        &mut self.scheduler
    }
}

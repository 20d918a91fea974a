//! Supported players and how each one signals that an ad is playing.

mod ad_artists;

use crate::config::{PlayerKind, PlayerSettings};
use crate::metadata::TrackMetadata;

/// Track id prefixes Spotify uses for ad slots.
pub const SPOTIFY_AD_PREFIXES: &[&str] = &["spotify:ad:", "/com/spotify/ad/"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdRule {
    /// Ad iff the track id starts with one of the prefixes.
    TrackIdPrefix(Vec<String>),
    /// Ad iff the first artist is one of the placeholder strings.
    ArtistPlaceholder(Vec<String>),
}

impl AdRule {
    /// Missing fields classify as regular content so real tracks are never muted by accident.
    pub fn is_ad(&self, metadata: &TrackMetadata) -> bool {
        match self {
            AdRule::TrackIdPrefix(prefixes) => metadata
                .track_id
                .as_deref()
                .is_some_and(|id| prefixes.iter().any(|p| id.starts_with(p.as_str()))),
            AdRule::ArtistPlaceholder(placeholders) => metadata
                .first_artist()
                .is_some_and(|artist| placeholders.iter().any(|p| p == artist)),
        }
    }
}

/// Everything the watcher needs to know about one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    /// Well-known MPRIS name on the session bus.
    pub bus_name: String,
    /// `application.process.binary` the audio server reports for its streams.
    pub binary_name: String,
    pub rule: AdRule,
}

impl PlayerProfile {
    pub fn spotify() -> Self {
        Self {
            bus_name: "org.mpris.MediaPlayer2.spotify".to_string(),
            binary_name: "spotify".to_string(),
            rule: AdRule::TrackIdPrefix(owned(SPOTIFY_AD_PREFIXES)),
        }
    }

    pub fn youtube_music() -> Self {
        Self {
            bus_name: "org.mpris.MediaPlayer2.youtubemusic".to_string(),
            binary_name: "youtubemusic".to_string(),
            rule: AdRule::ArtistPlaceholder(owned(ad_artists::VIDEO_AFTER_AD)),
        }
    }

    pub fn for_kind(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Spotify => Self::spotify(),
            PlayerKind::YoutubeMusic => Self::youtube_music(),
        }
    }

    /// Build the profile for the configured player, applying name overrides and
    /// extra placeholder artists.
    pub fn from_settings(settings: &PlayerSettings) -> Self {
        let mut profile = Self::for_kind(settings.kind);
        if let Some(name) = &settings.bus_name {
            profile.bus_name = name.clone();
        }
        if let Some(binary) = &settings.binary_name {
            profile.binary_name = binary.clone();
        }
        if let AdRule::ArtistPlaceholder(placeholders) = &mut profile.rule {
            placeholders.extend(settings.extra_ad_artists.iter().cloned());
        }
        profile
    }

    pub fn classify(&self, metadata: &TrackMetadata) -> bool {
        self.rule.is_ad(metadata)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests;

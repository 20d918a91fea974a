//! MPRIS track metadata as seen on a `PropertiesChanged` notification.

use std::collections::HashMap;

use zvariant::{OwnedValue, Value};

use crate::error::Result;

/// Name of the changed property carrying track metadata.
pub const METADATA_PROPERTY: &str = "Metadata";

/// Snapshot of the fields the ad classifiers look at.
///
/// Every field is optional on the wire; absent or mistyped entries are left
/// empty rather than failing the notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub track_id: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
    pub artists: Vec<String>,
}

impl TrackMetadata {
    pub fn from_dict(dict: &HashMap<String, OwnedValue>) -> Self {
        let text = |key: &str| dict.get(key).and_then(|v| as_text(v));
        Self {
            track_id: text("mpris:trackid"),
            title: text("xesam:title"),
            album: text("xesam:album"),
            artists: dict
                .get("xesam:artist")
                .map(|v| as_text_list(v))
                .unwrap_or_default(),
        }
    }

    pub fn first_artist(&self) -> Option<&str> {
        self.artists.first().map(String::as_str)
    }

    /// Artists joined for display.
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

/// Extract track metadata from a `PropertiesChanged` mapping.
///
/// Returns `Ok(None)` when the mapping has no `Metadata` entry or the entry is
/// an empty dictionary.
pub fn changed_metadata(changed: &HashMap<&str, Value<'_>>) -> Result<Option<TrackMetadata>> {
    let Some(value) = changed.get(METADATA_PROPERTY) else {
        return Ok(None);
    };
    let dict = HashMap::<String, OwnedValue>::try_from(value.try_clone()?)?;
    if dict.is_empty() {
        return Ok(None);
    }
    Ok(Some(TrackMetadata::from_dict(&dict)))
}

fn as_text(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.as_str().to_owned()),
        // Spotify publishes its track ids as object paths.
        Value::ObjectPath(p) => Some(p.as_str().to_owned()),
        Value::Value(inner) => as_text(inner),
        _ => None,
    }
}

fn as_text_list(value: &Value<'_>) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(as_text).collect(),
        Value::Value(inner) => as_text_list(inner),
        other => as_text(other).into_iter().collect(),
    }
}

use super::*;

fn with_track_id(id: &str) -> TrackMetadata {
    TrackMetadata {
        track_id: Some(id.to_string()),
        ..TrackMetadata::default()
    }
}

fn with_artists(artists: &[&str]) -> TrackMetadata {
    TrackMetadata {
        artists: artists.iter().map(|a| a.to_string()).collect(),
        ..TrackMetadata::default()
    }
}

#[test]
fn spotify_flags_both_ad_prefixes() {
    let spotify = PlayerProfile::spotify();
    assert!(spotify.classify(&with_track_id("spotify:ad:1234")));
    assert!(spotify.classify(&with_track_id("/com/spotify/ad/1234")));
}

#[test]
fn spotify_treats_other_track_ids_as_content() {
    let spotify = PlayerProfile::spotify();
    assert!(!spotify.classify(&with_track_id("spotify:track:1234")));
    assert!(!spotify.classify(&with_track_id("/com/spotify/track/1234")));
    assert!(!spotify.classify(&with_track_id("xspotify:ad:1234")));
    assert!(!spotify.classify(&with_track_id("")));
}

#[test]
fn spotify_without_track_id_is_not_an_ad() {
    assert!(!PlayerProfile::spotify().classify(&TrackMetadata::default()));
}

#[test]
fn youtube_music_flags_every_known_locale() {
    let yt = PlayerProfile::youtube_music();
    for placeholder in ad_artists::VIDEO_AFTER_AD {
        assert!(yt.classify(&with_artists(&[*placeholder])), "{placeholder}");
    }
}

#[test]
fn youtube_music_only_checks_first_artist_exactly() {
    let yt = PlayerProfile::youtube_music();
    assert!(!yt.classify(&with_artists(&["Some Band", "Video will play after ad"])));
    assert!(!yt.classify(&with_artists(&["video will play after ad"])));
    assert!(!yt.classify(&with_artists(&["Video wird nach der Werbung abgespielt"])));
}

#[test]
fn youtube_music_empty_artist_list_is_not_an_ad() {
    assert!(!PlayerProfile::youtube_music().classify(&with_artists(&[])));
}

#[test]
fn from_settings_applies_overrides_and_extra_artists() {
    let settings = PlayerSettings {
        kind: PlayerKind::YoutubeMusic,
        bus_name: Some("org.mpris.MediaPlayer2.youtube-music".to_string()),
        binary_name: None,
        extra_ad_artists: vec!["Video wird nach der Werbung abgespielt".to_string()],
    };

    let profile = PlayerProfile::from_settings(&settings);
    assert_eq!(profile.bus_name, "org.mpris.MediaPlayer2.youtube-music");
    assert_eq!(profile.binary_name, "youtubemusic");
    assert!(profile.classify(&with_artists(&["Video wird nach der Werbung abgespielt"])));
    assert!(profile.classify(&with_artists(&["Video will play after ad"])));
}

#[test]
fn extra_artists_do_not_change_prefix_rule() {
    let settings = PlayerSettings {
        extra_ad_artists: vec!["Spotify".to_string()],
        ..PlayerSettings::default()
    };

    let profile = PlayerProfile::from_settings(&settings);
    assert_eq!(profile, PlayerProfile::spotify());
}

use super::constants::{DEFAULT_VOLUME, ROTATION_DURATION_MS};
use super::nav::{default_links, HighlightPolicy, NavLink};
use super::playlist::NextTrackPolicy;
use super::rotation::RotationSequence;

/// Page-level settings.
///
/// Defaults describe the current site: four-face cycle, static links,
/// shuffled playlist with crossfade, and session-persisted playback.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub sequence: RotationSequence,
    pub rotation_duration_ms: f64,
    pub highlight: HighlightPolicy,
    pub restart_rotation_on_play: bool,
    pub links: Vec<NavLink>,

    pub playlist: Vec<String>,
    pub next_track: NextTrackPolicy,
    pub volume: f64,
    pub crossfade: bool,
    pub persist_session: bool,
    pub gain_normalization: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sequence: RotationSequence::default(),
            rotation_duration_ms: ROTATION_DURATION_MS,
            highlight: HighlightPolicy::Static,
            restart_rotation_on_play: false,
            links: default_links(),
            playlist: default_playlist(),
            next_track: NextTrackPolicy::ShuffledSequence,
            volume: DEFAULT_VOLUME,
            crossfade: true,
            persist_session: true,
            gain_normalization: false,
        }
    }
}

pub fn default_playlist() -> Vec<String> {
    [
        "Music-Site/Abba - Dancing Queen (Official Music Video Remastered).mp3",
        "Music-Site/Rick Astley - Together Forever (Official Video) [4K Remaster].mp3",
        "Music-Site/Dschinghis Khan - Moskau (Starparade 14.06.1979).mp3",
        "Music-Site/Redbone - Come and Get Your Love (Single Edit - Audio).mp3",
        "Music-Site/Earth, Wind & Fire - September.mp3",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

use rand::prelude::*;

/// How the next track is picked when one ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextTrackPolicy {
    /// Shuffle once when the playlist is built, then play in order.
    ShuffledSequence,
    /// Pick uniformly at random, never repeating the track that just played.
    RandomNoRepeat,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("playlist has no tracks")]
    Empty,
}

/// Track list plus the order it is played in.
///
/// Indices handed out by [`Playlist::current_index`] and taken by
/// [`Playlist::select`] always refer to the configured track list, so they
/// stay valid across reshuffles (a reload builds a new play order).
#[derive(Clone, Debug)]
pub struct Playlist {
    tracks: Vec<String>,
    order: Vec<usize>,
    policy: NextTrackPolicy,
    position: usize,
}

impl Playlist {
    pub fn new<R: Rng + ?Sized>(
        tracks: Vec<String>,
        policy: NextTrackPolicy,
        rng: &mut R,
    ) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }
        let mut order: Vec<usize> = (0..tracks.len()).collect();
        if policy == NextTrackPolicy::ShuffledSequence {
            order.shuffle(rng);
        }
        Ok(Self {
            tracks,
            order,
            policy,
            position: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Index of the current track in the configured list.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.order[self.position]
    }

    #[inline]
    pub fn current_track(&self) -> &str {
        &self.tracks[self.current_index()]
    }

    /// Tracks in configured order.
    #[inline]
    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    /// Play order as indices into [`Playlist::tracks`].
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Jump to track `index` of the configured list (wrapped to its length).
    /// Sequential play continues from that track's place in the play order.
    pub fn select(&mut self, index: usize) -> &str {
        let index = index % self.tracks.len();
        self.position = self.order.iter().position(|&i| i == index).unwrap_or(0);
        self.current_track()
    }

    /// Move to the next track according to the policy and return it.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let len = self.order.len();
        self.position = match self.policy {
            NextTrackPolicy::ShuffledSequence => (self.position + 1) % len,
            NextTrackPolicy::RandomNoRepeat if len > 1 => {
                // Draw from the other len-1 slots, then skip over the current one.
                let pick = rng.gen_range(0..len - 1);
                if pick >= self.position {
                    pick + 1
                } else {
                    pick
                }
            }
            NextTrackPolicy::RandomNoRepeat => 0,
        };
        self.current_track()
    }
}

use log::{debug, info, warn};

use crate::hal::Sound;
use crate::song::{Cursor, Song};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing(Cursor),
    Muted,
}

/// Walks a `Song` one note per update and tracks the mute state.
///
/// Unmuting always restarts the song from its first note.
#[derive(Debug)]
pub struct Sequencer<'a> {
    song: &'a Song<'a>,
    state: PlaybackState,
    rest_ms: u32,
}

impl<'a> Sequencer<'a> {
    /// Create a `Sequencer` positioned at the start of `song`. While muted,
    /// each update holds silence for `rest_ms`.
    pub fn new(song: &'a Song<'a>, rest_ms: u32) -> Self {
        Sequencer {
            song,
            state: PlaybackState::Playing(Cursor::START),
            rest_ms,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_muted(&self) -> bool {
        self.state == PlaybackState::Muted
    }

    /// Silence every voice and stop playback.
    ///
    /// Returns `false` without touching `sound` if already muted.
    pub fn mute<S: Sound>(&mut self, sound: &mut S) -> bool {
        if let PlaybackState::Muted = self.state {
            return false;
        }

        sound.silence();
        self.state = PlaybackState::Muted;
        info!("muted");

        true
    }

    /// Restart playback from the top of the song. Returns `false` if not
    /// muted.
    pub fn unmute(&mut self) -> bool {
        if let PlaybackState::Playing(_) = self.state {
            return false;
        }

        self.state = PlaybackState::Playing(Cursor::START);
        info!("unmuted, restarting song");

        true
    }

    /// Start the next note, or hold silence while muted. Returns the number of
    /// milliseconds until the next update is due.
    pub fn update<S: Sound>(&mut self, sound: &mut S) -> u32 {
        let cursor = match self.state {
            PlaybackState::Playing(cursor) => cursor,
            PlaybackState::Muted => {
                sound.silence();
                return self.rest_ms;
            }
        };

        match self.song.advance(cursor, sound) {
            Some((duration, next)) => {
                if next == Cursor::START {
                    debug!("song finished, looping");
                }
                self.state = PlaybackState::Playing(next);

                duration
            }
            None => {
                warn!("song has no notes, resting for {}ms", self.rest_ms);
                sound.silence();

                self.rest_ms
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::RecordingSound;

    const DURATIONS: &[u16] = &[0, 50, 100, 150];
    static SONG: Song = Song::new(
        &[&[69, 57, 45, 2, 71, 59, 47, 2, 72, 60, 48, 3], &[74, 0, 0, 1]],
        &[0, 1],
        DURATIONS,
    );

    #[test]
    fn starts_playing() {
        let sequencer = Sequencer::new(&SONG, 10_000);

        assert_eq!(sequencer.state(), PlaybackState::Playing(Cursor::START));
        assert!(!sequencer.is_muted());
    }

    #[test]
    fn update_advances() {
        let mut sequencer = Sequencer::new(&SONG, 10_000);
        let mut sound = RecordingSound::default();

        assert_eq!(sequencer.update(&mut sound), 100);
        assert_eq!(sound.voices, [440, 220, 110]);
        assert_eq!(
            sequencer.state(),
            PlaybackState::Playing(Cursor { position: 0, note: 1 })
        );
    }

    #[test]
    fn full_song_returns_to_start() {
        let mut sequencer = Sequencer::new(&SONG, 10_000);
        let mut sound = RecordingSound::default();

        for _ in 0..SONG.total_notes() {
            sequencer.update(&mut sound);
        }
        assert_eq!(sequencer.state(), PlaybackState::Playing(Cursor::START));
    }

    #[test]
    fn mute_is_idempotent() {
        let mut sequencer = Sequencer::new(&SONG, 10_000);
        let mut sound = RecordingSound::default();
        sequencer.update(&mut sound);
        sound.writes.clear();

        assert!(sequencer.mute(&mut sound));
        assert_eq!(sound.voices, [0, 0, 0]);
        assert_eq!(sound.writes.len(), 3);

        assert!(!sequencer.mute(&mut sound));
        assert_eq!(sound.writes.len(), 3);
        assert_eq!(sequencer.state(), PlaybackState::Muted);
    }

    #[test]
    fn muted_update_rests() {
        let mut sequencer = Sequencer::new(&SONG, 10_000);
        let mut sound = RecordingSound::default();
        sequencer.mute(&mut sound);

        assert_eq!(sequencer.update(&mut sound), 10_000);
        assert_eq!(sound.voices, [0, 0, 0]);
        assert_eq!(sequencer.state(), PlaybackState::Muted);
    }

    #[test]
    fn unmute_restarts() {
        let mut sequencer = Sequencer::new(&SONG, 10_000);
        let mut sound = RecordingSound::default();

        assert!(!sequencer.unmute());

        for _ in 0..3 {
            sequencer.update(&mut sound);
        }
        assert_eq!(
            sequencer.state(),
            PlaybackState::Playing(Cursor { position: 1, note: 0 })
        );

        sequencer.mute(&mut sound);
        assert!(sequencer.unmute());
        assert_eq!(sequencer.state(), PlaybackState::Playing(Cursor::START));
        assert!(!sequencer.unmute());
    }

    #[test]
    fn silent_song_rests() {
        static SILENT: Song = Song::new(&[&[]], &[0], DURATIONS);
        let mut sequencer = Sequencer::new(&SILENT, 5_000);
        let mut sound = RecordingSound {
            voices: [1, 2, 3],
            ..Default::default()
        };

        assert_eq!(sequencer.update(&mut sound), 5_000);
        assert_eq!(sound.voices, [0, 0, 0]);
        assert_eq!(sequencer.state(), PlaybackState::Playing(Cursor::START));
    }
}

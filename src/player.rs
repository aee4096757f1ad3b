use log::{debug, trace};

use crate::consts::*;
use crate::deadline::Deadline;
use crate::frame::{Animation, FrameCursor};
use crate::hal::{Clock, Display, Keypad, Sound};
use crate::render::Renderer;
use crate::sequencer::Sequencer;
use crate::song::Song;

/// Timing knobs for `Player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Time between animation frames.
    pub frame_period_ms: u32,
    /// How long each silent update lasts while muted.
    pub muted_rest_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frame_period_ms: DEFAULT_FRAME_PERIOD_MS,
            muted_rest_ms: DEFAULT_MUTED_REST_MS,
        }
    }
}

/// The main loop: interleaves animation frames and notes on one thread.
///
/// Each `poll` reads the keypad, then draws a frame if the video deadline has
/// passed, then starts a note if the audio deadline has passed. A late poll
/// still moves each deadline forward by a single period, so frames and notes
/// that were missed are dropped rather than replayed.
#[derive(Debug)]
pub struct Player<'a, C, D, S, K> {
    clock: C,
    display: D,
    sound: S,
    keypad: K,

    animation: &'a Animation<'a>,
    renderer: Renderer,
    frames: FrameCursor,
    sequencer: Sequencer<'a>,
    config: Config,

    video: Deadline,
    audio: Deadline,
}

impl<'a, C, D, S, K> Player<'a, C, D, S, K>
where
    C: Clock,
    D: Display,
    S: Sound,
    K: Keypad,
{
    /// Create a `Player`. The first frame and the first note are both due
    /// immediately.
    pub fn new(
        mut clock: C,
        display: D,
        sound: S,
        keypad: K,
        animation: &'a Animation<'a>,
        song: &'a Song<'a>,
        config: Config,
    ) -> Self {
        let now = clock.now_ms();

        Player {
            clock,
            display,
            sound,
            keypad,
            animation,
            renderer: Renderer::new(),
            frames: FrameCursor::new(animation.len()),
            sequencer: Sequencer::new(song, config.muted_rest_ms),
            config,
            video: Deadline::at(now),
            audio: Deadline::at(now),
        }
    }

    /// Poll forever. The badge must be reset to leave this loop.
    pub fn run(mut self) -> ! {
        loop {
            self.poll();
        }
    }

    /// Run one iteration of the main loop.
    pub fn poll(&mut self) {
        self.scan_keypad();

        if self.video.is_due(self.clock.now_ms()) {
            self.video.advance(self.config.frame_period_ms);
            self.draw_frame();
        }

        if self.audio.is_due(self.clock.now_ms()) {
            let duration = self.sequencer.update(&mut self.sound);
            self.audio.advance(duration);
        }
    }

    fn scan_keypad(&mut self) {
        let buttons = self.keypad.sample();
        self.keypad.release();

        if buttons.mute {
            if self.sequencer.mute(&mut self.sound) {
                // The rest starts now rather than when the cut-off note would
                // have ended. The voices are already silent.
                self.audio.reset(self.clock.now_ms());
                self.audio.advance(self.config.muted_rest_ms);
            }
        } else if buttons.unmute && self.sequencer.unmute() {
            self.audio.reset(self.clock.now_ms());
        }
    }

    fn draw_frame(&mut self) {
        let index = self.frames.index();
        trace!("drawing frame {}", index);

        self.renderer.render(&mut self.display, self.animation, index);
        if self.frames.advance() {
            debug!("animation looped");
        }
    }

    pub fn sequencer(&self) -> &Sequencer<'a> {
        &self.sequencer
    }

    /// Index of the frame the next video update will draw.
    pub fn frame_index(&self) -> usize {
        self.frames.index()
    }

    pub fn video_deadline(&self) -> Deadline {
        self.video
    }

    pub fn audio_deadline(&self) -> Deadline {
        self.audio
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut S {
        &mut self.sound
    }

    pub fn keypad_mut(&mut self) -> &mut K {
        &mut self.keypad
    }

    /// Give back the peripherals.
    pub fn into_parts(self) -> (C, D, S, K) {
        (self.clock, self.display, self.sound, self.keypad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Frame, Run};
    use crate::hal::mock::*;
    use crate::hal::Buttons;
    use crate::palette::Palette;
    use crate::sequencer::PlaybackState;
    use crate::song::Cursor;

    type TestPlayer<'a> = Player<'a, MockClock, RecordingDisplay, RecordingSound, ScriptedKeypad>;

    const FULL: &[Run] = &[Run::new(1, 80)];
    const ROWS: [&[Run]; 60] = [FULL; 60];
    static PALETTE: Palette = Palette::from_words([0x0011_2233; PALETTE_LENGTH]);
    static FRAMES: [Frame; 12] = [Frame::new(&ROWS); 12];
    static ANIMATION: Animation = Animation::new(&PALETTE, &FRAMES, 4);

    static SONG: Song = Song::new(
        &[
            &[69, 57, 45, 2, 71, 59, 47, 2, 72, 60, 48, 3, 74, 62, 50, 1],
            &[76, 0, 0, 4],
        ],
        &[0, 1],
        &[0, 50, 100, 150, 400],
    );

    fn player(now: u32) -> TestPlayer<'static> {
        Player::new(
            MockClock { now },
            RecordingDisplay::default(),
            RecordingSound::default(),
            ScriptedKeypad::default(),
            &ANIMATION,
            &SONG,
            Config::default(),
        )
    }

    fn press(player: &mut TestPlayer, mute: bool, unmute: bool) {
        player.keypad_mut().buttons = Buttons { mute, unmute };
        player.poll();
        player.keypad_mut().buttons = Buttons::default();
    }

    #[test]
    fn first_poll_draws_and_plays() {
        let mut player = player(1_000);

        player.poll();
        assert_eq!(player.display().windows.len(), 60);
        assert_eq!(player.display().pixels.len(), DISPLAY_WIDTH * DISPLAY_HEIGHT);
        assert_eq!(player.frame_index(), 1);
        assert_eq!(player.video_deadline(), Deadline::at(1_070));
        assert_eq!(player.sound().voices, [440, 220, 110]);
        assert_eq!(player.audio_deadline(), Deadline::at(1_100));
    }

    #[test]
    fn nothing_due_nothing_done() {
        let mut player = player(0);
        player.poll();
        player.display_mut().windows.clear();

        player.clock_mut().now = 69;
        player.poll();
        assert!(player.display().windows.is_empty());
        assert_eq!(player.frame_index(), 1);
    }

    #[test]
    fn keypad_released_after_scan() {
        let mut player = player(0);

        player.poll();
        player.poll();
        let (_, _, _, keypad) = player.into_parts();
        assert_eq!(keypad.scans, 2);
        assert!(!keypad.selected);
    }

    #[test]
    fn animation_cycles() {
        let mut player = player(0);

        for i in 0..12 {
            player.clock_mut().now = i * 70;
            player.poll();
        }
        assert_eq!(player.frame_index(), 0);
    }

    #[test]
    fn late_poll_drops_frames() {
        let mut player = player(0);
        player.poll();

        // Three periods late: one frame is drawn and the deadline moves one
        // period, keeping its original phase.
        player.clock_mut().now = 250;
        player.poll();
        assert_eq!(player.frame_index(), 2);
        assert_eq!(player.video_deadline(), Deadline::at(140));

        player.clock_mut().now = 251;
        player.poll();
        assert_eq!(player.frame_index(), 3);
        assert_eq!(player.video_deadline(), Deadline::at(210));
    }

    #[test]
    fn deadlines_survive_clock_wrap() {
        let start = u32::MAX - 100;
        let mut player = player(start);
        player.poll();
        assert_eq!(player.video_deadline(), Deadline::at(start.wrapping_add(70)));
        assert_eq!(player.audio_deadline(), Deadline::at(start.wrapping_add(100)));

        // Clock wrapped to a small value past both deadlines.
        player.clock_mut().now = 5;
        player.poll();
        assert_eq!(player.frame_index(), 2);
        assert_eq!(
            player.sequencer().state(),
            PlaybackState::Playing(Cursor { position: 0, note: 2 })
        );
    }

    #[test]
    fn mute_mid_note() {
        let mut player = player(0);
        player.poll();
        assert_eq!(player.sound().voices, [440, 220, 110]);

        player.clock_mut().now = 30;
        press(&mut player, true, false);
        assert_eq!(player.sound().voices, [0, 0, 0]);
        assert_eq!(player.sequencer().state(), PlaybackState::Muted);
        assert_eq!(player.audio_deadline(), Deadline::at(30 + DEFAULT_MUTED_REST_MS));
    }

    #[test]
    fn mute_silences_once() {
        let mut player = player(0);
        player.poll();

        player.clock_mut().now = 30;
        player.sound_mut().writes.clear();
        press(&mut player, true, false);
        assert_eq!(player.sound().writes, [(0, 0), (1, 0), (2, 0)]);

        player.clock_mut().now = 40;
        press(&mut player, true, false);
        assert_eq!(player.sound().writes.len(), NUM_VOICES);
    }

    #[test]
    fn mute_held_is_noop() {
        let mut player = player(0);
        player.poll();
        press(&mut player, true, false);
        let deadline = player.audio_deadline();

        player.clock_mut().now = 500;
        press(&mut player, true, false);
        assert_eq!(player.audio_deadline(), deadline);
    }

    #[test]
    fn unmute_restarts_song() {
        let mut player = player(0);
        for now in [0, 100, 200] {
            player.clock_mut().now = now;
            player.poll();
        }
        assert_eq!(
            player.sequencer().state(),
            PlaybackState::Playing(Cursor { position: 0, note: 3 })
        );

        player.clock_mut().now = 250;
        press(&mut player, true, false);

        player.clock_mut().now = 300;
        press(&mut player, false, true);
        // Restarted from the first note, due immediately.
        assert_eq!(player.sound().voices, [440, 220, 110]);
        assert_eq!(
            player.sequencer().state(),
            PlaybackState::Playing(Cursor { position: 0, note: 1 })
        );
        assert_eq!(player.audio_deadline(), Deadline::at(400));
    }

    #[test]
    fn unmute_while_playing_is_ignored() {
        let mut player = player(0);
        player.poll();

        player.clock_mut().now = 50;
        press(&mut player, false, true);
        assert_eq!(player.audio_deadline(), Deadline::at(100));
        assert_eq!(
            player.sequencer().state(),
            PlaybackState::Playing(Cursor { position: 0, note: 1 })
        );
    }

    #[test]
    fn mute_wins_over_unmute() {
        let mut player = player(0);
        player.poll();

        press(&mut player, true, true);
        assert!(player.sequencer().is_muted());
    }
}

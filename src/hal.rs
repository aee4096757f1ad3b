//! Traits for the peripherals the player drives. Board support code
//! implements these over its own registers; the player never touches
//! hardware directly.

use crate::consts::NUM_VOICES;
use crate::palette::Rgb;

/// Free-running millisecond counter. May wrap.
pub trait Clock {
    fn now_ms(&mut self) -> u32;
}

/// Rectangular write window on the display, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    /// Window covering `width` columns and `height` rows starting at `(x, y)`.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Window {
            x0: x as u16,
            y0: y as u16,
            x1: (x + width.max(1) - 1) as u16,
            y1: (y + height.max(1) - 1) as u16,
        }
    }

    pub fn width(&self) -> usize {
        usize::from(self.x1 - self.x0) + 1
    }

    pub fn height(&self) -> usize {
        usize::from(self.y1 - self.y0) + 1
    }
}

/// Command/data display transport without a framebuffer.
///
/// Pixels written after `begin_write` fill the current window left to right,
/// top to bottom. A new `set_window` or `begin_write` ends the previous write.
pub trait Display {
    fn set_window(&mut self, window: Window);
    fn begin_write(&mut self);
    fn write_pixel(&mut self, color: Rgb);
}

/// Tone generator with `NUM_VOICES` independent voices.
pub trait Sound {
    /// Program `voice` to play `frequency` Hz. Zero silences the voice.
    fn set_voice_frequency(&mut self, voice: usize, frequency: u16);

    fn silence(&mut self) {
        for voice in 0..NUM_VOICES {
            self.set_voice_frequency(voice, 0);
        }
    }
}

/// State of the two playback controls for one scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Buttons {
    pub mute: bool,
    pub unmute: bool,
}

impl Buttons {
    /// Decode two active-low input lines (`false` means pressed).
    pub const fn from_active_low(mute_line: bool, unmute_line: bool) -> Self {
        Buttons {
            mute: !mute_line,
            unmute: !unmute_line,
        }
    }
}

/// Matrix keypad holding the mute and unmute keys.
///
/// `sample` selects the key row and reads the columns. The row must be
/// released afterwards or it stays latched low.
pub trait Keypad {
    fn sample(&mut self) -> Buttons;
    fn release(&mut self);
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::vec::Vec;

    #[derive(Debug, Default)]
    pub(crate) struct MockClock {
        pub(crate) now: u32,
    }

    impl Clock for MockClock {
        fn now_ms(&mut self) -> u32 {
            self.now
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingDisplay {
        pub(crate) windows: Vec<Window>,
        pub(crate) writes: usize,
        pub(crate) pixels: Vec<Rgb>,
    }

    impl Display for RecordingDisplay {
        fn set_window(&mut self, window: Window) {
            self.windows.push(window);
        }

        fn begin_write(&mut self) {
            self.writes += 1;
        }

        fn write_pixel(&mut self, color: Rgb) {
            self.pixels.push(color);
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingSound {
        pub(crate) voices: [u16; NUM_VOICES],
        pub(crate) writes: Vec<(usize, u16)>,
    }

    impl Sound for RecordingSound {
        fn set_voice_frequency(&mut self, voice: usize, frequency: u16) {
            self.voices[voice] = frequency;
            self.writes.push((voice, frequency));
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct ScriptedKeypad {
        pub(crate) buttons: Buttons,
        pub(crate) selected: bool,
        pub(crate) scans: usize,
    }

    impl Keypad for ScriptedKeypad {
        fn sample(&mut self) -> Buttons {
            self.selected = true;
            self.scans += 1;
            self.buttons
        }

        fn release(&mut self) {
            self.selected = false;
        }
    }
}

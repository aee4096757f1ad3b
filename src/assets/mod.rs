//! Compiled-in artwork and music.
//!
//! The animation is 12 frames of 80x60 source pixels shown at quarter scale.
//! Each note packs three MIDI pitches (bass and harmony under the lead) and
//! a duration code.

use crate::frame::Animation;
use crate::palette::Palette;
use crate::song::Song;

mod frames;

pub const SCALE: usize = 4;

#[rustfmt::skip]
pub static PALETTE: Palette = Palette::from_words([
    0x0000_3366, 0x00ff_ffff, 0x0000_0000, 0x0099_9999,
    0x00ff_cc99, 0x00ff_99ff, 0x00ff_3399, 0x00ff_0000,
    0x00ff_9900, 0x00ff_ff00, 0x0033_ff00, 0x0000_99ff,
    0x0066_33ff, 0x00ff_9999, 0x0033_3333, 0x0000_0000,
]);

pub static ANIMATION: Animation = Animation::new(&PALETTE, &frames::FRAMES, SCALE);

/// Hold time in milliseconds, indexed by duration code.
pub static DURATIONS: [u16; 8] = [0, 50, 100, 150, 200, 300, 400, 600];

// C, rising arpeggio
const MEASURE_0: [u8; 32] = [
    76, 48, 55, 2, 79, 48, 55, 2, 84, 48, 55, 2, 79, 48, 55, 2,
    76, 48, 55, 2, 79, 48, 55, 2, 84, 48, 55, 2, 88, 48, 55, 2,
];
// A minor
const MEASURE_1: [u8; 32] = [
    81, 45, 52, 2, 84, 45, 52, 2, 88, 45, 52, 2, 84, 45, 52, 2,
    81, 45, 52, 2, 84, 45, 52, 2, 88, 45, 52, 2, 93, 45, 52, 2,
];
// F
const MEASURE_2: [u8; 32] = [
    77, 41, 48, 2, 81, 41, 48, 2, 84, 41, 48, 2, 81, 41, 48, 2,
    77, 41, 48, 2, 81, 41, 48, 2, 84, 41, 48, 2, 89, 41, 48, 2,
];
// G
const MEASURE_3: [u8; 32] = [
    79, 43, 50, 2, 83, 43, 50, 2, 86, 43, 50, 2, 83, 43, 50, 2,
    79, 43, 50, 2, 83, 43, 50, 2, 86, 43, 50, 2, 91, 43, 50, 2,
];
// C, lead
const MEASURE_4: [u8; 24] = [
    84, 48, 55, 4, 83, 48, 55, 2, 84, 48, 0, 2, 88, 48, 55, 4,
    86, 48, 0, 2, 84, 48, 55, 2,
];
// Breath
const MEASURE_5: [u8; 4] = [
    0, 0, 0, 7,
];
// G, lead
const MEASURE_6: [u8; 28] = [
    86, 43, 50, 2, 88, 43, 0, 2, 86, 43, 50, 2, 83, 43, 0, 2,
    79, 43, 50, 4, 81, 43, 0, 2, 83, 43, 50, 2,
];
// C, cadence
const MEASURE_7: [u8; 16] = [
    84, 48, 55, 4, 79, 48, 0, 2, 76, 48, 55, 2, 72, 36, 48, 6,
];

static MEASURES: [&[u8]; 8] = [
    &MEASURE_0, &MEASURE_1, &MEASURE_2, &MEASURE_3, &MEASURE_4, &MEASURE_5, &MEASURE_6, &MEASURE_7,
];

static SEQUENCE: [u8; 13] = [0, 1, 2, 3, 0, 1, 2, 3, 4, 6, 4, 7, 5];

pub static SONG: Song = Song::new(&MEASURES, &SEQUENCE, &DURATIONS);

//! Animation and music playback for a badge with a framebuffer-less display
//! and a three-voice tone generator.
//!
//! Frames are stored as run-length encoded rows over a 16-color palette and
//! streamed to the display one scanline at a time. A `Song` is a table of
//! measures played in a repeating sequence. `Player` interleaves both from a
//! single polling loop driven by a millisecond clock.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod assets;
mod consts;
mod deadline;
mod error;
mod frame;
pub mod hal;
mod palette;
pub mod pitch;
mod player;
mod render;
mod sequencer;
mod song;

pub use consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH, NOTE_LENGTH, NUM_VOICES, PALETTE_LENGTH};
pub use deadline::Deadline;
pub use error::Error;
pub use frame::{row_width, Animation, EncodedRow, Frame, FrameCursor, Run};
pub use palette::{Palette, Rgb};
pub use player::{Config, Player};
pub use render::{decode_row, render_line, LineBuffer, Renderer};
pub use sequencer::{PlaybackState, Sequencer};
pub use song::{Cursor, DurationTable, Note, Song};

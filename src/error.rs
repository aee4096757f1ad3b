#[cfg(feature = "std")]
use thiserror::Error;

/// Problems found while validating compiled-in assets.
///
/// Playback never returns these. Malformed data is clamped at runtime, and
/// `validate` exists so asset tables can be checked once (in tests or at
/// boot) instead of on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum Error {
    #[cfg_attr(feature = "std", error("Scale factor {0} does not divide the display"))]
    InvalidScale(usize),

    #[cfg_attr(feature = "std", error("Animation has no frames"))]
    EmptyAnimation,

    #[cfg_attr(
        feature = "std",
        error("Frame {frame} has {rows} rows, expected {expected}")
    )]
    RowCount {
        frame: usize,
        rows: usize,
        expected: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("Frame {frame} row {row} is {width} pixels wide, expected {expected}")
    )]
    RowWidth {
        frame: usize,
        row: usize,
        width: usize,
        expected: usize,
    },

    #[cfg_attr(feature = "std", error("Song sequence is empty"))]
    EmptySequence,

    #[cfg_attr(
        feature = "std",
        error("Sequence position {position} names missing measure {measure}")
    )]
    InvalidMeasure { position: usize, measure: u8 },

    #[cfg_attr(
        feature = "std",
        error("Measure {measure} note {note} uses unknown duration code {code}")
    )]
    InvalidDuration { measure: usize, note: usize, code: u8 },
}

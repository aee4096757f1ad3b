pub const DISPLAY_WIDTH: usize = 320;
pub const DISPLAY_HEIGHT: usize = 240;

pub const PALETTE_LENGTH: usize = 16;
pub const NUM_VOICES: usize = 3;

/// Bytes per packed note: one pitch byte per voice, then the duration code.
pub const NOTE_LENGTH: usize = NUM_VOICES + 1;

pub const RUN_INDEX_SHIFT: u16 = 12;
pub const RUN_LENGTH_MASK: u16 = 0x0fff;

pub const DEFAULT_FRAME_PERIOD_MS: u32 = 70;
pub const DEFAULT_MUTED_REST_MS: u32 = 10_000;

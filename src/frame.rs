use core::fmt;

use crate::consts::*;
use crate::error::Error;
use crate::palette::Palette;

/// One run of an encoded row: a 4-bit palette index in the top nibble and a
/// 12-bit run length (in source pixels, before scaling) below it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Run(u16);

impl Run {
    pub const fn new(index: u8, length: u16) -> Self {
        Run(((index as u16 & 0xf) << RUN_INDEX_SHIFT) | (length & RUN_LENGTH_MASK))
    }

    pub const fn from_bits(bits: u16) -> Self {
        Run(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn index(self) -> u8 {
        (self.0 >> RUN_INDEX_SHIFT) as u8
    }

    pub const fn length(self) -> u16 {
        self.0 & RUN_LENGTH_MASK
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Run({}x{})", self.index(), self.length())
    }
}

/// A run-length encoded source scanline.
pub type EncodedRow<'a> = &'a [Run];

/// Sum of the run lengths in `row`, in unscaled source pixels.
pub fn row_width(row: &[Run]) -> usize {
    row.iter().map(|run| usize::from(run.length())).sum()
}

/// A single animation frame: one `EncodedRow` per source scanline.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    rows: &'a [EncodedRow<'a>],
}

impl<'a> Frame<'a> {
    pub const fn new(rows: &'a [EncodedRow<'a>]) -> Self {
        Frame { rows }
    }

    pub fn rows(&self) -> &'a [EncodedRow<'a>] {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// A cyclic sequence of `Frame`s sharing one `Palette`, rendered at an integer
/// `scale` to fill the display.
#[derive(Debug, Clone, Copy)]
pub struct Animation<'a> {
    palette: &'a Palette,
    frames: &'a [Frame<'a>],
    scale: usize,
}

impl<'a> Animation<'a> {
    /// Create an `Animation`. `scale` is 1 for full resolution, 2 for half,
    /// 4 for quarter, and so on.
    pub const fn new(palette: &'a Palette, frames: &'a [Frame<'a>], scale: usize) -> Self {
        Animation {
            palette,
            frames,
            scale,
        }
    }

    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<Frame<'a>> {
        self.frames.get(index).copied()
    }

    /// Width of a source row before scaling.
    pub fn source_width(&self) -> usize {
        DISPLAY_WIDTH / self.scale.max(1)
    }

    /// Number of source rows per frame.
    pub fn source_height(&self) -> usize {
        DISPLAY_HEIGHT / self.scale.max(1)
    }

    /// Check that every row of every frame covers exactly the display width
    /// once scaled, and that every frame covers the display height.
    pub fn validate(&self) -> Result<(), Error> {
        let scale = self.scale;
        if scale == 0 || DISPLAY_WIDTH % scale != 0 || DISPLAY_HEIGHT % scale != 0 {
            return Err(Error::InvalidScale(scale));
        }
        if self.frames.is_empty() {
            return Err(Error::EmptyAnimation);
        }

        let expected_width = self.source_width();
        let expected_rows = self.source_height();
        for (frame, data) in self.frames.iter().enumerate() {
            if data.height() != expected_rows {
                return Err(Error::RowCount {
                    frame,
                    rows: data.height(),
                    expected: expected_rows,
                });
            }

            for (row, runs) in data.rows().iter().enumerate() {
                let width = row_width(runs);
                if width != expected_width {
                    return Err(Error::RowWidth {
                        frame,
                        row,
                        width,
                        expected: expected_width,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Index of the frame to show next. Wraps to zero after the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCursor {
    index: usize,
    len: usize,
}

impl FrameCursor {
    pub const fn new(len: usize) -> Self {
        FrameCursor { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step to the next frame. Returns `true` when the animation wrapped.
    pub fn advance(&mut self) -> bool {
        self.index += 1;
        if self.index >= self.len {
            self.index = 0;
            return true;
        }

        false
    }
}

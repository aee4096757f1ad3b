use arrayvec::ArrayVec;
use core::iter;

use crate::consts::DISPLAY_WIDTH;
use crate::frame::{Animation, EncodedRow};
use crate::hal::{Display, Window};
use crate::palette::{Palette, Rgb};

/// One fully expanded display line.
pub type LineBuffer = ArrayVec<Rgb, DISPLAY_WIDTH>;

/// Expand `row` into `line`, repeating each source pixel `scale` times.
///
/// Runs that would overflow the display width are cut at the right edge, and
/// a row that falls short is padded with black, so `line` always ends up
/// exactly `DISPLAY_WIDTH` pixels long.
pub fn decode_row(row: EncodedRow, palette: &Palette, scale: usize, line: &mut LineBuffer) {
    line.clear();

    for run in row {
        let color = palette.get(run.index());
        let count = (usize::from(run.length()) * scale).min(line.remaining_capacity());
        line.extend(iter::repeat(color).take(count));
    }

    let padding = line.remaining_capacity();
    line.extend(iter::repeat(Rgb::BLACK).take(padding));
}

/// Stream `line` to the display as a block of `scale` identical rows whose top
/// edge is at `y`.
pub fn render_line<D: Display>(display: &mut D, line: &[Rgb], y: usize, scale: usize) {
    display.set_window(Window::new(0, y, line.len(), scale));
    display.begin_write();

    for _ in 0..scale {
        for &color in line {
            display.write_pixel(color);
        }
    }
}

/// Decodes frames one scanline at a time into a single line buffer, so a whole
/// frame never needs to be held in RAM.
#[derive(Debug, Default)]
pub struct Renderer {
    line: LineBuffer,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            line: LineBuffer::new(),
        }
    }

    /// The most recently decoded line.
    pub fn line(&self) -> &[Rgb] {
        &self.line
    }

    /// Draw frame `index` of `animation` over the whole display.
    pub fn render<D: Display>(&mut self, display: &mut D, animation: &Animation, index: usize) {
        let frame = match animation.frame(index) {
            Some(frame) => frame,
            None => return,
        };
        let scale = animation.scale().max(1);

        for (source_y, row) in frame.rows().iter().enumerate() {
            decode_row(row, animation.palette(), scale, &mut self.line);
            render_line(display, &self.line, source_y * scale, scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::frame::{Frame, Run};
    use crate::hal::mock::RecordingDisplay;
    use std::vec::Vec;

    fn palette() -> Palette {
        let mut words = [0; PALETTE_LENGTH];
        for (i, word) in words.iter_mut().enumerate() {
            *word = 0x0011_1111 * i as u32;
        }

        Palette::from_words(words)
    }

    /// Run-length compress a scaled line back into source runs.
    fn encode_line(line: &[Rgb], palette: &Palette, scale: usize) -> Vec<Run> {
        let mut runs: Vec<Run> = Vec::new();

        for color in line.chunks(scale).map(|chunk| chunk[0]) {
            let index = (0..PALETTE_LENGTH as u8)
                .find(|&i| palette.get(i) == color)
                .unwrap();
            match runs.last_mut() {
                Some(run) if run.index() == index => *run = Run::new(index, run.length() + 1),
                _ => runs.push(Run::new(index, 1)),
            }
        }

        runs
    }

    /// Merge neighboring runs of the same color.
    fn normalize(row: &[Run]) -> Vec<Run> {
        let mut runs: Vec<Run> = Vec::new();

        for run in row.iter().filter(|run| run.length() > 0) {
            match runs.last_mut() {
                Some(last) if last.index() == run.index() => {
                    *last = Run::new(run.index(), last.length() + run.length())
                }
                _ => runs.push(*run),
            }
        }

        runs
    }

    #[test]
    fn decode_single_run() {
        let palette = palette();
        let mut line = LineBuffer::new();

        decode_row(&[Run::new(3, 80)], &palette, 4, &mut line);
        assert_eq!(line.len(), DISPLAY_WIDTH);
        assert!(line.iter().all(|&color| color == palette.get(3)));
    }

    #[test]
    fn decode_scales_each_run() {
        let palette = palette();
        let mut line = LineBuffer::new();
        let row = [Run::new(1, 1), Run::new(2, 3), Run::new(1, 156)];

        decode_row(&row, &palette, 2, &mut line);
        assert_eq!(line.len(), DISPLAY_WIDTH);
        assert_eq!(&line[..2], &[palette.get(1); 2]);
        assert_eq!(&line[2..8], &[palette.get(2); 6]);
        assert_eq!(line[8], palette.get(1));
    }

    #[test]
    fn decode_round_trip() {
        let palette = palette();
        let mut line = LineBuffer::new();
        let rows: [&[Run]; 4] = [
            &[Run::new(0, 80)],
            &[Run::new(5, 10), Run::new(9, 30), Run::new(5, 40)],
            &[Run::new(2, 20), Run::new(2, 20), Run::new(7, 1), Run::new(4, 39)],
            &[Run::new(1, 40), Run::new(15, 0), Run::new(1, 40)],
        ];

        for scale in [1, 2, 4] {
            for row in rows.iter() {
                let width = DISPLAY_WIDTH / scale;
                let mut row = row.to_vec();
                // Stretch the last run so the row fills this scale's width.
                let short = width - crate::frame::row_width(&row[..row.len() - 1]);
                let last = row.len() - 1;
                row[last] = Run::new(row[last].index(), short as u16);

                decode_row(&row, &palette, scale, &mut line);
                assert_eq!(line.len(), DISPLAY_WIDTH);
                assert_eq!(encode_line(&line, &palette, scale), normalize(&row));
            }
        }
    }

    #[test]
    fn decode_clamps_long_rows() {
        let palette = palette();
        let mut line = LineBuffer::new();
        let row = [Run::new(1, 70), Run::new(2, 0xfff), Run::new(3, 10)];

        decode_row(&row, &palette, 4, &mut line);
        assert_eq!(line.len(), DISPLAY_WIDTH);
        assert_eq!(line[279], palette.get(1));
        assert_eq!(line[280], palette.get(2));
        assert_eq!(line[DISPLAY_WIDTH - 1], palette.get(2));
    }

    #[test]
    fn decode_pads_short_rows() {
        let palette = palette();
        let mut line = LineBuffer::new();

        decode_row(&[Run::new(9, 10)], &palette, 4, &mut line);
        assert_eq!(line.len(), DISPLAY_WIDTH);
        assert_eq!(line[39], palette.get(9));
        assert_eq!(line[40], Rgb::BLACK);
    }

    #[test]
    fn render_line_repeats_rows() {
        let palette = palette();
        let mut line = LineBuffer::new();

        for scale in [1, 2, 4] {
            let half = (DISPLAY_WIDTH / scale / 2) as u16;
            let mut display = RecordingDisplay::default();
            decode_row(&[Run::new(6, half), Run::new(8, half)], &palette, scale, &mut line);

            render_line(&mut display, &line, 8, scale);
            assert_eq!(display.windows, [Window::new(0, 8, DISPLAY_WIDTH, scale)]);
            assert_eq!(display.windows[0].height(), scale);
            assert_eq!(display.writes, 1);
            assert_eq!(display.pixels.len(), DISPLAY_WIDTH * scale);
            for block in display.pixels.chunks(DISPLAY_WIDTH) {
                assert_eq!(block, &line[..]);
            }
        }
    }

    #[test]
    fn render_single_row_frame() {
        let palette = palette();
        let rows: [&[Run]; 1] = [&[Run::new(3, 80)]];
        let frames = [Frame::new(&rows)];
        let animation = Animation::new(&palette, &frames, 4);
        let mut display = RecordingDisplay::default();
        let mut renderer = Renderer::new();

        renderer.render(&mut display, &animation, 0);
        assert_eq!(display.windows.len(), 1);
        assert_eq!(display.windows[0].height(), 4);
        assert_eq!(display.windows[0].width(), DISPLAY_WIDTH);
        assert_eq!(display.pixels.len(), DISPLAY_WIDTH * 4);
        assert!(display.pixels.iter().all(|&color| color == palette.get(3)));
    }

    #[test]
    fn render_full_frame() {
        let palette = palette();
        const HALVES: &[Run] = &[Run::new(1, 40), Run::new(2, 40)];
        let rows = [HALVES; 60];
        let frames = [Frame::new(&rows)];
        let animation = Animation::new(&palette, &frames, 4);
        let mut display = RecordingDisplay::default();
        let mut renderer = Renderer::new();

        renderer.render(&mut display, &animation, 0);
        assert_eq!(display.windows.len(), 60);
        assert_eq!(display.writes, 60);
        assert_eq!(display.pixels.len(), DISPLAY_WIDTH * DISPLAY_HEIGHT);
        for (i, window) in display.windows.iter().enumerate() {
            assert_eq!(usize::from(window.y0), i * 4);
            assert_eq!(window.height(), 4);
        }
    }

    #[test]
    fn render_missing_frame() {
        let palette = palette();
        let frames: [Frame; 0] = [];
        let animation = Animation::new(&palette, &frames, 4);
        let mut display = RecordingDisplay::default();

        Renderer::new().render(&mut display, &animation, 3);
        assert!(display.windows.is_empty());
    }
}

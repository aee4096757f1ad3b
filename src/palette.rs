use crate::consts::PALETTE_LENGTH;

/// A 24-bit color stored as `0x00RRGGBB`. The high byte is unused.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build a color from a packed `0xNNRRGGBB` word, discarding `NN`.
    pub const fn from_u32(word: u32) -> Self {
        Rgb(word & 0x00ff_ffff)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// The triple in the order the display expects it on the wire.
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

/// Fixed table of 16 colors addressed by the 4-bit index of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LENGTH],
}

impl Palette {
    pub const fn new(colors: [Rgb; PALETTE_LENGTH]) -> Self {
        Palette { colors }
    }

    /// Create a `Palette` from packed `0xNNRRGGBB` words.
    pub const fn from_words(words: [u32; PALETTE_LENGTH]) -> Self {
        let mut colors = [Rgb::BLACK; PALETTE_LENGTH];
        let mut i = 0;
        while i < PALETTE_LENGTH {
            colors[i] = Rgb::from_u32(words[i]);
            i += 1;
        }

        Palette { colors }
    }

    /// Resolve a palette index. Only the low four bits are significant.
    pub fn get(&self, index: u8) -> Rgb {
        self.colors[usize::from(index) % PALETTE_LENGTH]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_channels() {
        let color = Rgb::from_u32(0xab12_3456);

        assert_eq!(color.to_u32(), 0x0012_3456);
        assert_eq!(color.to_bytes(), [0x12, 0x34, 0x56]);
        assert_eq!(color, Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn palette_masks_index() {
        let mut words = [0; PALETTE_LENGTH];
        words[3] = 0xff_00_00;
        let palette = Palette::from_words(words);

        assert_eq!(palette.get(3), Rgb::new(0xff, 0, 0));
        assert_eq!(palette.get(3 + PALETTE_LENGTH as u8), Rgb::new(0xff, 0, 0));
    }
}

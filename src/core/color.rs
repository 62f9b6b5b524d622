/// Line and marker colors, numbered as the plotting backend numbers them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(i16)]
pub enum Color {
    White = 0,
    Black = 1,
    Gray = 920,
    Red = 632,
    Green = 416,
    Blue = 600,
    Yellow = 400,
    Magenta = 616,
    Cyan = 432,
    Orange = 800,
    Spring = 820,
    Teal = 840,
    Azure = 860,
    Violet = 880,
    Pink = 900,
}

impl Color {
    #[inline(always)]
    pub fn code(self) -> i16 {
        self as i16
    }
}

/// Colors handed out to successive 1D histograms, in order.
pub static PALETTE: [Color; 10] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Orange,
    Color::Violet,
    Color::Azure,
    Color::Pink,
];

/// Position in `PALETTE` of the next color to hand out.
///
/// Past the last entry the cursor either wraps to the first color or keeps
/// returning the last one, depending on `looping`.
#[derive(Clone, Debug)]
pub struct ColorCursor {
    palette: &'static [Color],
    position: usize,
    looping: bool,
}

impl ColorCursor {
    pub fn new() -> ColorCursor {
        ColorCursor::with_palette(&PALETTE)
    }

    pub(crate) fn with_palette(palette: &'static [Color]) -> ColorCursor {
        debug_assert!(!palette.is_empty());
        ColorCursor { palette, position: 0, looping: true }
    }

    pub fn next_color(&mut self) -> Color {
        if self.position >= self.palette.len() {
            if !self.looping {
                return self.palette[self.palette.len() - 1];
            }
            trace!("color palette exhausted, starting over");
            self.position = 0;
        }
        let color = self.palette[self.position];
        self.position += 1;
        color
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}

impl Default for ColorCursor {
    fn default() -> ColorCursor {
        ColorCursor::new()
    }
}

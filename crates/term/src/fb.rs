//! Framebuffer of styled terminal glyphs.

use crossterm::style::Color;

/// One terminal character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph::plain(' ', Color::Reset);

    pub const fn plain(ch: char, fg: Color) -> Self {
        Self {
            ch,
            fg,
            bg: Color::Reset,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn on(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs the size of the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the size, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs.resize(width as usize * height as usize, Glyph::BLANK);
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::BLANK);
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    /// Writes outside the buffer are dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Glyph) {
        for (dx, ch) in s.chars().enumerate() {
            let Some(cx) = x.checked_add(dx as u16) else {
                break;
            };
            self.set(cx, y, Glyph { ch, ..style });
        }
    }

    /// Decimal digits of `value` without going through a `String`.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: Glyph) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in 0..len {
            let ch = digits[len - 1 - i] as char;
            self.set(x.saturating_add(i as u16), y, Glyph { ch, ..style });
        }
    }

    /// Text content of row `y`, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|g| g.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(3, 0, Glyph::plain('x', Color::Red));
        fb.set(0, 2, Glyph::plain('x', Color::Red));
        assert!(fb.glyphs.iter().all(|g| *g == Glyph::BLANK));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn test_put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        fb.put_u32(0, 0, 0, Glyph::BLANK);
        fb.put_u32(2, 0, 4096, Glyph::BLANK);
        assert_eq!(fb.row_text(0), "0 4096      ");
    }

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "LINES", Glyph::BLANK);
        assert_eq!(fb.row_text(0), "  LI");
    }

    #[test]
    fn test_resize_keeps_blank_fill() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 3);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.get(2, 2), Some(Glyph::BLANK));
    }
}

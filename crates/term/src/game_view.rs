//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph};
use crate::glyphs::GlyphTable;
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Draws the bordered field centred in the viewport with a small side panel.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    glyphs: GlyphTable,
}

impl GameView {
    pub fn new(glyphs: GlyphTable) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let cell_w = self.glyphs.cell_width.max(1);
        let field_w = FIELD_WIDTH as u16 * cell_w;
        let field_h = FIELD_HEIGHT as u16;
        let start_x = viewport.width.saturating_sub(field_w) / 2;
        let start_y = viewport.height.saturating_sub(field_h) / 2;

        // The grid carries its own border ring, so this draws the frame too.
        for (r, row) in snap.grid.rows().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                let glyph = self.glyphs.glyph(cell);
                let x = start_x.saturating_add(c as u16 * cell_w);
                for dx in 0..cell_w {
                    fb.set(x.saturating_add(dx), start_y.saturating_add(r as u16), glyph);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x.saturating_add(field_w), start_y);

        if snap.game_over {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(field_w.saturating_sub(text_w) / 2);
            let y = start_y.saturating_add(field_h / 2);
            fb.put_str(x, y, text, Glyph::plain(' ', Color::White).on(Color::Black).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        field_right: u16,
        start_y: u16,
    ) {
        let panel_x = field_right.saturating_add(2);
        if panel_x.saturating_add(5) > viewport.width {
            return;
        }
        let label = Glyph::plain(' ', Color::White).bold();
        let value = Glyph::plain(' ', Color::Grey);

        fb.put_str(panel_x, start_y.saturating_add(1), "LINES", label);
        fb.put_u32(panel_x, start_y.saturating_add(2), snap.lines, value);
    }
}

//! GameView: maps a `core::GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Renders the tile grid as a field of coloured boxes with a score panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Columns between tiles.
    gap_x: u16,
    /// Rows between tiles.
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x2 tiles fit a 6x6 grid into a 24-row terminal.
        Self {
            cell_w: 6,
            cell_h: 2,
            gap_x: 1,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_gaps(mut self, gap_x: u16, gap_y: u16) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the board including its border, for a grid of `size`.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let n = size as u16;
        let w = n * self.cell_w + (n + 1) * self.gap_x;
        let h = n * self.cell_h + (n + 1) * self.gap_y;
        (w + 2, h + 2)
    }

    /// Terminal position of the top-left corner of tile (row, col), given the
    /// board frame origin.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        let px = start_x + 1 + self.gap_x + (col as u16) * (self.cell_w + self.gap_x);
        let py = start_y + 1 + self.gap_y + (row as u16) * (self.cell_h + self.gap_y);
        (px, py)
    }

    /// Frame origin for a grid of `size` inside `viewport`.
    pub fn frame_origin(&self, size: usize, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (start_x, start_y)
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let (start_x, start_y) = self.frame_origin(snap.size, viewport);

        let bg = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, values) in snap.rows().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let (px, py) = self.tile_origin(start_x, start_y, row, col);
                if value == 0 {
                    self.draw_empty_tile(fb, px, py);
                } else {
                    self.draw_tile(fb, px, py, value);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let style = CellStyle::new(DARK_TEXT, EMPTY_BG).dim();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, value: Tile) {
        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let digits = digit_count(value);
        let tx = px + self.cell_w.saturating_sub(digits) / 2;
        let ty = py + (self.cell_h.saturating_sub(1)) / 2;
        fb.put_u64(tx, ty, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.max_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves as u64, value);
        y = y.saturating_add(2);

        for line in ["arrows/hjkl move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);

        let title = "GAME OVER";
        let title_w = title.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(title_w) / 2);
        fb.put_str(x, mid_y.saturating_sub(1), title, style);

        let prefix = "SCORE ";
        let line_w = prefix.len() as u16 + digit_count(snap.score);
        let x = start_x.saturating_add(frame_w.saturating_sub(line_w) / 2);
        fb.put_str(x, mid_y, prefix, style);
        fb.put_u64(x + prefix.len() as u16, mid_y, snap.score, style);
    }
}

/// Background/foreground for a tile value; colours deepen as tiles grow.
pub fn tile_style(value: Tile) -> CellStyle {
    let (bg, fg) = match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}

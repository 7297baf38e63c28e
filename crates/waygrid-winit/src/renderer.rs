//! Renders a [`ViewFrame`] into a pixel buffer.
//!
//! Cells are flat colour rectangles taken from the palette; buttons are
//! filled rectangles with a border and a fontdue-rasterized label; the
//! status banner is a single text line under the grid.

use std::collections::HashMap;

use fontdue::{Font, FontSettings};

use waygrid_core::{Color, Rect, ViewFrame, VisualizerConfig};

const OPAQUE: u32 = 0xFF00_0000;

/// Cached rasterized glyph.
struct Glyph {
    bitmap: Vec<u8>, // alpha values, width*height
    width: usize,
    height: usize,
    x_offset: i32,
    y_offset: i32,
    advance: f32,
}

pub(crate) struct FrameRenderer {
    viz: VisualizerConfig,
    width: usize,
    height: usize,
    /// 0xFFRRGGBB pixel buffer, `width` × `height`.
    pixels: Vec<u32>,
    font: Option<Font>,
    font_size: f32,
    glyph_cache: HashMap<char, Glyph>,
    warned_no_font: bool,
}

impl FrameRenderer {
    pub fn new(
        viz: VisualizerConfig,
        width: usize,
        height: usize,
        font_data: Option<&[u8]>,
        font_size: f32,
    ) -> Self {
        let font = font_data.and_then(|data| {
            Font::from_bytes(data, FontSettings::default())
                .inspect_err(|e| log::warn!("failed to parse font: {e}"))
                .ok()
        });
        let bg = pixel(viz.palette.empty);
        Self {
            viz,
            width,
            height,
            pixels: vec![bg; width * height],
            font,
            font_size,
            glyph_cache: HashMap::new(),
            warned_no_font: false,
        }
    }

    /// Redraw the whole frame into the internal pixel buffer.
    pub fn render(&mut self, frame: &ViewFrame) {
        let bg = pixel(self.viz.palette.empty);
        self.pixels.fill(bg);

        // Grid cells.
        let cell = self.viz.cell_px;
        for (p, state) in frame.canvas.iter() {
            let color = self.viz.palette.color_for(state);
            if color != self.viz.palette.empty {
                self.fill_rect(
                    Rect::new(p.x * cell, p.y * cell, (p.x + 1) * cell, (p.y + 1) * cell),
                    color,
                );
            }
        }

        // Border around the grid area.
        let g = self.viz.grid_px();
        let border = self.viz.palette.wall;
        self.fill_rect(Rect::new(0, 0, g, 1), border);
        self.fill_rect(Rect::new(0, g - 1, g, g), border);
        self.fill_rect(Rect::new(0, 0, 1, g), border);
        self.fill_rect(Rect::new(g - 1, 0, g, g), border);

        // Buttons: filled accent rectangle, 3 px border, centred label.
        for button in &frame.buttons {
            let r = button.rect;
            self.fill_rect(r, self.viz.palette.path);
            self.stroke_rect(r, 3, border);
            let tx = r.min.x + 12;
            let ty = r.min.y + (r.height() - self.font_size as i32) / 2;
            self.draw_text(tx, ty, &button.label, border);
        }

        // Status banner between the grid and the buttons.
        if let Some(banner) = &frame.banner {
            self.draw_text(4, g + 3, banner, border);
        }
    }

    /// Copy the internal pixel buffer into the softbuffer surface buffer.
    pub fn blit_to_buffer(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let copy_w = self.width.min(buf_width);
        let copy_h = self.height.min(buf_height);

        if buf_width > self.width || buf_height > self.height {
            buf.fill(pixel(self.viz.palette.empty));
        }

        for y in 0..copy_h {
            let src_start = y * self.width;
            let dst_start = y * buf_width;
            buf[dst_start..dst_start + copy_w]
                .copy_from_slice(&self.pixels[src_start..src_start + copy_w]);
        }
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    fn fill_rect(&mut self, r: Rect, color: Color) {
        let px = pixel(color);
        let x0 = (r.min.x.max(0) as usize).min(self.width);
        let y0 = (r.min.y.max(0) as usize).min(self.height);
        let x1 = (r.max.x.max(0) as usize).min(self.width);
        let y1 = (r.max.y.max(0) as usize).min(self.height);
        for y in y0..y1 {
            let row = y * self.width;
            self.pixels[row + x0..row + x1].fill(px);
        }
    }

    fn stroke_rect(&mut self, r: Rect, thickness: i32, color: Color) {
        let t = thickness;
        self.fill_rect(Rect::new(r.min.x, r.min.y, r.max.x, r.min.y + t), color);
        self.fill_rect(Rect::new(r.min.x, r.max.y - t, r.max.x, r.max.y), color);
        self.fill_rect(Rect::new(r.min.x, r.min.y, r.min.x + t, r.max.y), color);
        self.fill_rect(Rect::new(r.max.x - t, r.min.y, r.max.x, r.max.y), color);
    }

    fn cache_glyph(&mut self, ch: char) {
        if self.glyph_cache.contains_key(&ch) {
            return;
        }
        let Some(font) = &self.font else { return };
        let (metrics, bitmap) = font.rasterize(ch, self.font_size);
        self.glyph_cache.insert(
            ch,
            Glyph {
                bitmap,
                width: metrics.width,
                height: metrics.height,
                x_offset: metrics.xmin,
                y_offset: metrics.ymin,
                advance: metrics.advance_width,
            },
        );
    }

    /// Draw a text line with its top-left corner at (x, y).
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        if self.font.is_none() {
            if !self.warned_no_font {
                log::warn!("no font available, text labels will not be drawn");
                self.warned_no_font = true;
            }
            return;
        }

        let ascent = self
            .font
            .as_ref()
            .and_then(|f| f.horizontal_line_metrics(self.font_size))
            .map(|m| m.ascent.ceil() as i32)
            .unwrap_or(self.font_size as i32);

        let (cr, cg, cb) = (color.r() as u32, color.g() as u32, color.b() as u32);
        let mut pen_x = x as f32;

        for ch in text.chars() {
            self.cache_glyph(ch);
            let Some(glyph) = self.glyph_cache.get(&ch) else {
                continue;
            };

            let gx0 = pen_x as i32 + glyph.x_offset;
            let gy0 = y + ascent - glyph.y_offset - glyph.height as i32;
            let (gw, gh) = (glyph.width, glyph.height);
            let advance = glyph.advance;

            for gy in 0..gh {
                for gx in 0..gw {
                    let alpha = self.glyph_cache[&ch].bitmap[gy * gw + gx] as u32;
                    if alpha == 0 {
                        continue;
                    }
                    let px = gx0 + gx as i32;
                    let py = gy0 + gy as i32;
                    if px < 0 || py < 0 || px as usize >= self.width || py as usize >= self.height
                    {
                        continue;
                    }
                    let idx = py as usize * self.width + px as usize;
                    // Alpha-blend the label colour over whatever is below.
                    let under = self.pixels[idx];
                    let (ur, ug, ub) = ((under >> 16) & 0xFF, (under >> 8) & 0xFF, under & 0xFF);
                    let inv = 255 - alpha;
                    let r = (cr * alpha + ur * inv) / 255;
                    let g = (cg * alpha + ug * inv) / 255;
                    let b = (cb * alpha + ub * inv) / 255;
                    self.pixels[idx] = OPAQUE | (r << 16) | (g << 8) | b;
                }
            }

            pen_x += advance;
        }
    }
}

#[inline]
fn pixel(c: Color) -> u32 {
    OPAQUE | c.0
}

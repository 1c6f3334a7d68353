//! Canvas: the shared pixel buffer plus the clip and translation state that
//! every window paints through.
//!
//! Why this exists
//! - Windows paint in their own local coordinates and know nothing about
//!   what covers them. The compositor sets up a clip [`Region`] and a
//!   translation before each paint callback, and every primitive here honors
//!   both, so a window can never scribble over a sibling stacked above it.
//! - All writes are clamped to the buffer, so primitives can be handed
//!   rectangles that hang off any edge.
//!
//! Clip contract
//! - Inactive region: draw anywhere inside the buffer.
//! - Active region: draw the shape once per member rect, clipped to that
//!   member. Members are disjoint, so no pixel is written twice.
//! - Active but empty region: draw nothing.
//!
//! Every primitive that writes pixels grows the pending damage rect, which
//! the host drains with [`Canvas::take_damage`] to learn what to present.

use std::fmt;

use crate::constants::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::font::{BasicFont, GlyphSource};
use crate::rect::{GeometryError, Rect};
use crate::region::Region;
use crate::theme;

pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<u32>,
    clip: Region,
    translate_x: i32,
    translate_y: i32,
    font: Box<dyn GlyphSource>,
    damage: Option<Rect>,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("clip", &self.clip)
            .field("translate", &(self.translate_x, self.translate_y))
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Result<Self, GeometryError> {
        Self::with_font(width, height, Box::new(BasicFont))
    }

    pub fn with_font(
        width: u16,
        height: u16,
        font: Box<dyn GlyphSource>,
    ) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptySize {
                width: width as u32,
                height: height as u32,
            });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![theme::TRANSPARENT; width as usize * height as usize],
            clip: Region::new(),
            translate_x: 0,
            translate_y: 0,
            font,
            damage: None,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rect in screen coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_edges(0, 0, self.height as i32 - 1, self.width as i32 - 1)
    }

    /// Row-major pixel storage.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if !self.bounds().contains_point(x, y) {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn clip(&self) -> &Region {
        &self.clip
    }

    pub fn clip_mut(&mut self) -> &mut Region {
        &mut self.clip
    }

    pub fn translation(&self) -> (i32, i32) {
        (self.translate_x, self.translate_y)
    }

    pub fn set_translation(&mut self, x: i32, y: i32) {
        self.translate_x = x;
        self.translate_y = y;
    }

    /// Drop the clip region and return to screen coordinates.
    pub fn reset(&mut self) {
        self.clip.clear();
        self.translate_x = 0;
        self.translate_y = 0;
    }

    /// Bounding rect of everything written since the last call.
    pub fn take_damage(&mut self) -> Option<Rect> {
        self.damage.take()
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: u32) {
        let Some(target) = self.screen_target(x, y, width, height) else {
            return;
        };
        for area in self.clipped_areas(&target) {
            let stride = self.width as usize;
            let left = area.left() as usize;
            let right = area.right() as usize;
            for row in area.top()..=area.bottom() {
                let start = row as usize * stride;
                self.pixels[start + left..=start + right].fill(color);
            }
            self.mark_damaged(area);
        }
    }

    pub fn horizontal_line(&mut self, x: i32, y: i32, length: u32, color: u32) {
        self.fill_rect(x, y, length, 1, color);
    }

    pub fn vertical_line(&mut self, x: i32, y: i32, length: u32, color: u32) {
        self.fill_rect(x, y, 1, length, color);
    }

    /// One-pixel outline of the given rectangle.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let inner = height.saturating_sub(2);
        self.horizontal_line(x, y, width, color);
        self.vertical_line(x, y + 1, inner, color);
        if height > 1 {
            self.horizontal_line(x, y + height as i32 - 1, width, color);
        }
        if width > 1 {
            self.vertical_line(x + width as i32 - 1, y + 1, inner, color);
        }
    }

    /// Draw one glyph cell with its top-left corner at `(x, y)`.
    pub fn draw_char(&mut self, ch: char, x: i32, y: i32, color: u32) {
        let Some(glyph) = self.font.glyph(ch) else {
            return;
        };
        let Some(cell) = self.screen_target(x, y, GLYPH_WIDTH as u32, GLYPH_HEIGHT as u32) else {
            return;
        };
        let origin = self.unclamped_origin(x, y);
        for area in self.clipped_areas(&cell) {
            for py in area.top()..=area.bottom() {
                let bits = glyph[(py - origin.1) as usize];
                for px in area.left()..=area.right() {
                    if bits & (0x80 >> (px - origin.0)) != 0 {
                        self.put(px, py, color);
                    }
                }
            }
            self.mark_damaged(area);
        }
    }

    /// Draw a single line of fixed-width text.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, color: u32) {
        for (idx, ch) in text.chars().enumerate() {
            self.draw_char(ch, x + idx as i32 * GLYPH_WIDTH, y, color);
        }
    }

    /// Copy a `width x height` row-major sprite, skipping pixels whose alpha
    /// byte is zero.
    pub fn blit_sprite(&mut self, x: i32, y: i32, width: u16, height: u16, sprite: &[u32]) {
        if sprite.len() < width as usize * height as usize {
            tracing::warn!(
                len = sprite.len(),
                width,
                height,
                "sprite smaller than its stated size"
            );
            return;
        }
        let Some(target) = self.screen_target(x, y, width as u32, height as u32) else {
            return;
        };
        let origin = self.unclamped_origin(x, y);
        for area in self.clipped_areas(&target) {
            for py in area.top()..=area.bottom() {
                let row = (py - origin.1) as usize * width as usize;
                for px in area.left()..=area.right() {
                    let src = sprite[row + (px - origin.0) as usize];
                    if theme::is_opaque(src) {
                        self.put(px, py, src);
                    }
                }
            }
            self.mark_damaged(area);
        }
    }

    fn unclamped_origin(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.saturating_add(self.translate_x),
            y.saturating_add(self.translate_y),
        )
    }

    /// Translate a local rect to screen space and clamp it to the buffer.
    fn screen_target(&self, x: i32, y: i32, width: u32, height: u32) -> Option<Rect> {
        let (sx, sy) = self.unclamped_origin(x, y);
        let rect = Rect::from_origin_size(sx, sy, width, height).ok()?;
        rect.intersect(&self.bounds())
    }

    /// The pieces of `target` the current clip state allows drawing to.
    fn clipped_areas(&self, target: &Rect) -> Vec<Rect> {
        if !self.clip.is_active() {
            return vec![*target];
        }
        self.clip
            .iter()
            .filter_map(|member| member.intersect(target))
            .collect()
    }

    fn put(&mut self, x: i32, y: i32, color: u32) {
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = color;
    }

    fn mark_damaged(&mut self, area: Rect) {
        self.damage = Some(match self.damage {
            Some(prev) => prev.union(&area),
            None => area,
        });
    }
}

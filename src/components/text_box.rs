use super::{Component, PaintContext};
use crate::constants::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::theme;

/// Right-aligned single line display of the window title.
#[derive(Debug, Default, Clone)]
pub struct TextBox;

const RIGHT_PADDING: i32 = 6;

impl Component for TextBox {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let (w, h) = (ctx.width, ctx.height);
        ctx.fill(theme::TEXT_BOX_BG);
        ctx.canvas.draw_rect(0, 0, w, h, theme::TEXT_BOX_BORDER);

        let text = ctx.title();
        let text_w = text.chars().count() as i32 * GLYPH_WIDTH;
        let x = w as i32 - text_w - RIGHT_PADDING;
        let y = (h as i32 - GLYPH_HEIGHT) / 2;
        ctx.canvas.draw_text(text, x, y, theme::TEXT_BOX_TEXT);
    }
}

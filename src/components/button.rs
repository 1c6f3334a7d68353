use super::{Component, PaintContext, WidgetEvent};
use crate::constants::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::theme;

/// A push button labelled with its window title. Every press flips the
/// bevel colour and reports [`WidgetEvent::Clicked`].
#[derive(Debug, Default, Clone)]
pub struct Button {
    toggled: bool,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }
}

impl Component for Button {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let (w, h) = (ctx.width, ctx.height);
        let bevel = if self.toggled {
            theme::button_bevel_toggled()
        } else {
            theme::button_bevel()
        };

        ctx.canvas
            .fill_rect(1, 1, w.saturating_sub(1), h.saturating_sub(1), theme::WINDOW_BG);
        ctx.canvas.draw_rect(0, 0, w, h, theme::BUTTON_FRAME);
        ctx.canvas
            .draw_rect(3, 3, w.saturating_sub(6), h.saturating_sub(6), bevel);
        ctx.canvas
            .draw_rect(4, 4, w.saturating_sub(8), h.saturating_sub(8), bevel);

        let label = ctx.title();
        let text_w = label.chars().count() as i32 * GLYPH_WIDTH;
        let x = (w as i32 - text_w) / 2;
        let y = (h as i32 - GLYPH_HEIGHT) / 2;
        ctx.canvas.draw_text(label, x, y, theme::BUTTON_TEXT);
    }

    fn on_press(&mut self, _x: i32, _y: i32) -> Option<WidgetEvent> {
        self.toggled = !self.toggled;
        Some(WidgetEvent::Clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn press_toggles_and_clicks() {
        let mut button = Button::new();
        assert_eq!(button.on_press(3, 3), Some(WidgetEvent::Clicked));
        assert!(button.is_toggled());
        button.on_press(3, 3);
        assert!(!button.is_toggled());
    }

    #[test]
    fn bevel_reflects_toggle_state() {
        let mut canvas = Canvas::new(40, 30).unwrap();
        let mut button = Button::new();
        button.paint(&mut PaintContext::new(&mut canvas, 40, 30, Some("1")));
        assert_eq!(canvas.pixel(0, 0), Some(theme::BUTTON_FRAME));
        assert_eq!(canvas.pixel(3, 3), Some(theme::button_bevel()));
        assert_eq!(canvas.pixel(2, 2), Some(theme::WINDOW_BG));

        button.on_press(0, 0);
        button.paint(&mut PaintContext::new(&mut canvas, 40, 30, Some("1")));
        assert_eq!(canvas.pixel(3, 3), Some(theme::button_bevel_toggled()));
    }
}

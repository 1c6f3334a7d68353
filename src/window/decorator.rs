use crate::canvas::Canvas;
use crate::constants::{BORDER_WIDTH, TITLE_HEIGHT};
use crate::rect::Rect;
use crate::theme;

pub trait WindowDecorator: std::fmt::Debug {
    /// Draw the border and titlebar of a decorated window whose outer bounds
    /// are `frame` (screen coordinates). The canvas clip is already set to
    /// the window's visible region.
    fn render_window(&self, canvas: &mut Canvas, frame: Rect, title: &str, active: bool);
}

/// Three-pixel bevelled frame with a 31px titlebar.
#[derive(Debug, Default)]
pub struct DefaultDecorator;

impl WindowDecorator for DefaultDecorator {
    fn render_window(&self, canvas: &mut Canvas, frame: Rect, title: &str, active: bool) {
        let title_color = if active {
            theme::TITLE_ACTIVE
        } else {
            theme::TITLE_INACTIVE
        };
        let (x, y) = (frame.left(), frame.top());
        let (w, h) = (frame.width(), frame.height());
        let border = BORDER_WIDTH as u32;

        canvas.draw_rect(x, y, w, h, theme::WINDOW_BORDER);
        canvas.draw_rect(x + 1, y + 1, w - 2, h - 2, title_color);
        canvas.draw_rect(x + 2, y + 2, w - 4, h - 4, title_color);

        // separator under the title band
        let inner_w = w - 2 * border;
        let sep_y = y + TITLE_HEIGHT - BORDER_WIDTH;
        canvas.horizontal_line(x + BORDER_WIDTH, sep_y, inner_w, theme::WINDOW_BORDER);
        canvas.horizontal_line(x + BORDER_WIDTH, sep_y + 1, inner_w, title_color);
        canvas.horizontal_line(x + BORDER_WIDTH, sep_y + 2, inner_w, title_color);

        canvas.fill_rect(
            x + BORDER_WIDTH,
            y + BORDER_WIDTH,
            inner_w,
            (TITLE_HEIGHT - 2 * BORDER_WIDTH) as u32,
            title_color,
        );
        canvas.draw_text(title, x + 10, y + 9, theme::TITLE_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_colors_follow_focus() {
        let mut canvas = Canvas::new(120, 80).unwrap();
        let frame = Rect::new(0, 0, 79, 119).unwrap();
        DefaultDecorator.render_window(&mut canvas, frame, "", true);
        assert_eq!(canvas.pixel(0, 0), Some(theme::WINDOW_BORDER));
        assert_eq!(canvas.pixel(1, 1), Some(theme::TITLE_ACTIVE));
        assert_eq!(canvas.pixel(60, 10), Some(theme::TITLE_ACTIVE));
        assert_eq!(canvas.pixel(60, 28), Some(theme::WINDOW_BORDER));
        assert_eq!(canvas.pixel(60, 30), Some(theme::TITLE_ACTIVE));
        // client area is left for the window itself
        assert_eq!(canvas.pixel(60, 31), Some(theme::TRANSPARENT));

        DefaultDecorator.render_window(&mut canvas, frame, "", false);
        assert_eq!(canvas.pixel(60, 10), Some(theme::TITLE_INACTIVE));
    }

    #[test]
    fn title_text_lands_in_the_band() {
        let mut canvas = Canvas::new(120, 80).unwrap();
        let frame = Rect::new(0, 0, 79, 119).unwrap();
        DefaultDecorator.render_window(&mut canvas, frame, "HI", true);
        let text_pixels = (9..21)
            .flat_map(|y| (10..26).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(theme::TITLE_TEXT))
            .count();
        assert!(text_pixels > 0);
    }
}

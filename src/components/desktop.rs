use super::{Component, PaintContext};
use crate::constants::{CURSOR_HEIGHT, CURSOR_WIDTH};
use crate::theme;

/// The root surface: a flat background behind every top-level window.
#[derive(Debug, Default, Clone)]
pub struct Desktop;

impl Component for Desktop {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        ctx.fill(theme::DESKTOP_BG);
    }
}

const O: u32 = theme::CURSOR_OUTLINE;
const F: u32 = theme::CURSOR_FILL;
const T: u32 = theme::TRANSPARENT;

/// Arrow pointer, row-major, hotspot at the top-left pixel.
#[rustfmt::skip]
pub const CURSOR_SPRITE: [u32; CURSOR_WIDTH as usize * CURSOR_HEIGHT as usize] = [
    O, T, T, T, T, T, T, T, T, T, T,
    O, O, T, T, T, T, T, T, T, T, T,
    O, F, O, T, T, T, T, T, T, T, T,
    O, F, F, O, T, T, T, T, T, T, T,
    O, F, F, F, O, T, T, T, T, T, T,
    O, F, F, F, F, O, T, T, T, T, T,
    O, F, F, F, F, F, O, T, T, T, T,
    O, F, F, F, F, F, F, O, T, T, T,
    O, F, F, F, F, F, F, F, O, T, T,
    O, F, F, F, F, F, F, F, F, O, T,
    O, F, F, F, F, F, F, F, F, F, O,
    O, O, O, O, F, F, F, O, O, O, O,
    T, T, T, T, O, F, F, O, T, T, T,
    T, T, T, T, O, F, F, O, T, T, T,
    T, T, T, T, T, O, F, F, O, T, T,
    T, T, T, T, T, O, F, F, O, T, T,
    T, T, T, T, T, T, O, F, O, T, T,
    T, T, T, T, T, T, T, O, O, T, T,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn desktop_fills_background() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        Desktop.paint(&mut PaintContext::new(&mut canvas, 8, 8, None));
        assert!(canvas.pixels().iter().all(|&p| p == theme::DESKTOP_BG));
    }

    #[test]
    fn cursor_hotspot_is_opaque() {
        assert!(theme::is_opaque(CURSOR_SPRITE[0]));
        assert!(!theme::is_opaque(CURSOR_SPRITE[CURSOR_WIDTH as usize - 1]));
    }
}

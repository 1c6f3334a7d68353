use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::PointerSample;

/// Turns terminal mouse reports into pointer samples in buffer pixels.
///
/// A terminal cell covers `scale` pixels horizontally and `2 * scale`
/// vertically (the presenter stacks two pixel rows per cell). Button state
/// is tracked across events because drag and move reports only say which
/// button is involved, not the full mask.
#[derive(Debug, Clone)]
pub struct PointerTranslator {
    scale: u16,
    buttons: u8,
}

impl PointerTranslator {
    pub fn new(scale: u16) -> Self {
        Self {
            scale: scale.max(1),
            buttons: 0,
        }
    }

    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    /// Map one mouse event. Scroll events carry no pointer state and are
    /// dropped.
    pub fn translate(&mut self, event: &MouseEvent) -> Option<PointerSample> {
        match event.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
                self.buttons |= button_bit(button);
            }
            MouseEventKind::Up(button) => self.buttons &= !button_bit(button),
            // a plain move means nothing is held, whatever we saw before
            MouseEventKind::Moved => self.buttons = 0,
            _ => return None,
        }
        Some(PointerSample {
            x: event.column.saturating_mul(self.scale),
            y: event.row.saturating_mul(self.scale.saturating_mul(2)),
            buttons: self.buttons,
        })
    }
}

fn button_bit(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 0x1,
        MouseButton::Right => 0x2,
        MouseButton::Middle => 0x4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn ev(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn scales_cells_to_pixels() {
        let mut t = PointerTranslator::new(2);
        let s = t
            .translate(&ev(MouseEventKind::Down(MouseButton::Left), 10, 5))
            .unwrap();
        assert_eq!(
            s,
            PointerSample {
                x: 20,
                y: 20,
                buttons: 1
            }
        );
    }

    #[test]
    fn tracks_buttons_across_drag_and_release() {
        let mut t = PointerTranslator::new(1);
        t.translate(&ev(MouseEventKind::Down(MouseButton::Left), 0, 0));
        let drag = t
            .translate(&ev(MouseEventKind::Drag(MouseButton::Left), 3, 1))
            .unwrap();
        assert_eq!(drag.buttons, 1);
        t.translate(&ev(MouseEventKind::Down(MouseButton::Right), 3, 1));
        assert_eq!(t.buttons(), 0x3);
        let up = t
            .translate(&ev(MouseEventKind::Up(MouseButton::Left), 3, 1))
            .unwrap();
        assert_eq!(up.buttons, 0x2);
        let moved = t.translate(&ev(MouseEventKind::Moved, 4, 1)).unwrap();
        assert_eq!(moved.buttons, 0);
    }

    #[test]
    fn scroll_is_ignored() {
        let mut t = PointerTranslator::new(1);
        assert!(t.translate(&ev(MouseEventKind::ScrollUp, 1, 1)).is_none());
    }

    #[test]
    fn zero_scale_is_clamped() {
        let mut t = PointerTranslator::new(0);
        let s = t.translate(&ev(MouseEventKind::Moved, 7, 3)).unwrap();
        assert_eq!((s.x, s.y), (7, 6));
    }
}

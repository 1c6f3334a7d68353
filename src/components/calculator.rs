//! A four-function calculator face: a display text box over a 4x4 key grid.
//!
//! Only entry is wired up. Digit keys append to the display (replacing a lone
//! `0`), `C` resets it, and the operator keys are accepted but do nothing.

use super::{Button, Component, PaintContext, TextBox, WidgetCommand, WidgetEvent, WindowKind};
use crate::constants::{BORDER_WIDTH, TITLE_HEIGHT};
use crate::theme;
use crate::window::{Compositor, CompositorError, WindowId, WindowSpec};

const CLIENT_WIDTH: u16 = 145;
const CLIENT_HEIGHT: u16 = 170;

const KEY_SIZE: u16 = 30;
const KEY_PITCH: i32 = 35;
const MARGIN: i32 = 5;
const DISPLAY_WIDTH: u16 = 135;
const DISPLAY_HEIGHT: u16 = 20;

const KEYS: [[char; 4]; 4] = [
    ['7', '8', '9', '+'],
    ['4', '5', '6', '-'],
    ['1', '2', '3', '*'],
    ['C', '0', '=', '/'],
];

#[derive(Debug, Default, Clone)]
pub struct Calculator {
    display: Option<WindowId>,
    keys: Vec<(WindowId, char)>,
    entry: String,
}

impl Calculator {
    pub const WIDTH: u16 = CLIENT_WIDTH + 2 * BORDER_WIDTH as u16;
    pub const HEIGHT: u16 = CLIENT_HEIGHT + (TITLE_HEIGHT + BORDER_WIDTH) as u16;

    /// Build a calculator under `parent` with its outer origin at `(x, y)`.
    ///
    /// The new window is topmost but not painted; callers paint it once
    /// placed. If any part fails to build, the partial subtree is removed.
    pub fn spawn(
        compositor: &mut Compositor,
        parent: WindowId,
        x: i32,
        y: i32,
    ) -> Result<WindowId, CompositorError> {
        let id = compositor.create_window(
            parent,
            WindowSpec::decorated(x, y, Self::WIDTH, Self::HEIGHT),
            WindowKind::Calculator(Calculator::default()),
        )?;
        if let Err(err) = Self::build(compositor, id) {
            tracing::warn!(window_id = ?id, error = %err, "calculator build failed");
            compositor.remove_window(id)?;
            return Err(err);
        }
        tracing::debug!(window_id = ?id, "spawned calculator");
        Ok(id)
    }

    fn build(compositor: &mut Compositor, id: WindowId) -> Result<(), CompositorError> {
        compositor.set_title(id, "Calculator")?;

        let display = compositor.create_window(
            id,
            WindowSpec::undecorated(MARGIN, MARGIN, DISPLAY_WIDTH, DISPLAY_HEIGHT),
            WindowKind::TextBox(TextBox),
        )?;
        compositor.set_title(display, "0")?;

        let mut keys = Vec::with_capacity(16);
        for (row, labels) in KEYS.iter().enumerate() {
            for (col, &label) in labels.iter().enumerate() {
                let spec = WindowSpec::undecorated(
                    MARGIN + KEY_PITCH * col as i32,
                    MARGIN + DISPLAY_HEIGHT as i32 + MARGIN + KEY_PITCH * row as i32,
                    KEY_SIZE,
                    KEY_SIZE,
                );
                let key = compositor.create_window(id, spec, WindowKind::Button(Button::new()))?;
                compositor.set_title(key, label.to_string())?;
                keys.push((key, label));
            }
        }

        if let Some(WindowKind::Calculator(calculator)) = compositor.kind_mut(id) {
            calculator.display = Some(display);
            calculator.keys = keys;
            calculator.entry = String::from("0");
        }
        Ok(())
    }

    pub fn display(&self) -> Option<WindowId> {
        self.display
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// The window carrying `label`, if this calculator has such a key.
    pub fn key(&self, label: char) -> Option<WindowId> {
        self.keys
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(id, _)| *id)
    }
}

impl Component for Calculator {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        ctx.fill(theme::WINDOW_BG);
    }

    fn on_child_event(&mut self, child: WindowId, event: WidgetEvent) -> Vec<WidgetCommand> {
        let WidgetEvent::Clicked = event;
        let (Some(display), Some(&(_, label))) =
            (self.display, self.keys.iter().find(|(id, _)| *id == child))
        else {
            return Vec::new();
        };

        match label {
            'C' => {
                self.entry = String::from("0");
                vec![WidgetCommand::SetTitle {
                    window: display,
                    text: self.entry.clone(),
                }]
            }
            '0' if self.entry == "0" => Vec::new(),
            digit if digit.is_ascii_digit() => {
                if self.entry == "0" {
                    self.entry = digit.to_string();
                    vec![WidgetCommand::SetTitle {
                        window: display,
                        text: self.entry.clone(),
                    }]
                } else {
                    self.entry.push(digit);
                    vec![WidgetCommand::AppendTitle {
                        window: display,
                        text: digit.to_string(),
                    }]
                }
            }
            _ => Vec::new(),
        }
    }
}

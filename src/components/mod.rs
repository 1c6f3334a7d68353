use crate::canvas::Canvas;
use crate::theme;
use crate::window::WindowId;

pub mod button;
pub mod calculator;
pub mod desktop;
pub mod text_box;

pub use button::Button;
pub use calculator::Calculator;
pub use desktop::Desktop;
pub use text_box::TextBox;

/// What a component gets while it paints.
///
/// The canvas is already clipped to the window's visible client area and
/// translated so `(0, 0)` is the client origin.
#[derive(Debug)]
pub struct PaintContext<'a> {
    pub canvas: &'a mut Canvas,
    pub width: u32,
    pub height: u32,
    pub title: Option<&'a str>,
}

impl<'a> PaintContext<'a> {
    pub fn new(canvas: &'a mut Canvas, width: u32, height: u32, title: Option<&'a str>) -> Self {
        Self {
            canvas,
            width,
            height,
            title,
        }
    }

    pub fn title(&self) -> &'a str {
        self.title.unwrap_or("")
    }

    /// Fill the whole client area.
    pub fn fill(&mut self, color: u32) {
        self.canvas.fill_rect(0, 0, self.width, self.height, color);
    }
}

/// Notifications a component raises toward its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    Clicked,
}

/// Requests a component sends back to the compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    SetTitle { window: WindowId, text: String },
    AppendTitle { window: WindowId, text: String },
}

pub trait Component: std::fmt::Debug {
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Press edge at client coordinates `(x, y)` that no child consumed.
    fn on_press(&mut self, _x: i32, _y: i32) -> Option<WidgetEvent> {
        None
    }

    /// A direct child reported `event`.
    fn on_child_event(&mut self, _child: WindowId, _event: WidgetEvent) -> Vec<WidgetCommand> {
        Vec::new()
    }
}

/// The behaviour attached to a window.
#[derive(Debug, Default)]
pub enum WindowKind {
    #[default]
    Plain,
    Desktop(Desktop),
    Button(Button),
    TextBox(TextBox),
    Calculator(Calculator),
    Custom(Box<dyn Component>),
}

impl WindowKind {
    fn as_component(&self) -> Option<&dyn Component> {
        match self {
            WindowKind::Plain => None,
            WindowKind::Desktop(c) => Some(c),
            WindowKind::Button(c) => Some(c),
            WindowKind::TextBox(c) => Some(c),
            WindowKind::Calculator(c) => Some(c),
            WindowKind::Custom(c) => Some(c.as_ref()),
        }
    }

    fn as_component_mut(&mut self) -> Option<&mut dyn Component> {
        match self {
            WindowKind::Plain => None,
            WindowKind::Desktop(c) => Some(c),
            WindowKind::Button(c) => Some(c),
            WindowKind::TextBox(c) => Some(c),
            WindowKind::Calculator(c) => Some(c),
            WindowKind::Custom(c) => Some(c.as_mut()),
        }
    }
}

impl Component for WindowKind {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        match self.as_component() {
            Some(component) => component.paint(ctx),
            None => ctx.fill(theme::WINDOW_BG),
        }
    }

    fn on_press(&mut self, x: i32, y: i32) -> Option<WidgetEvent> {
        self.as_component_mut()?.on_press(x, y)
    }

    fn on_child_event(&mut self, child: WindowId, event: WidgetEvent) -> Vec<WidgetCommand> {
        match self.as_component_mut() {
            Some(component) => component.on_child_event(child, event),
            None => Vec::new(),
        }
    }
}

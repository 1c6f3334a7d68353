use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::canvas::Canvas;
use crate::components::{Button, Calculator, WidgetEvent, WindowKind};
use crate::drivers::mouse::PointerTranslator;
use crate::drivers::{InputDriver, OutputDriver, PointerSample};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::window::{Compositor, CompositorError, DispatchOutcome, WindowId, WindowSpec};

const LAUNCHER_X: i32 = 10;
const LAUNCHER_Y: i32 = 10;
const LAUNCHER_WIDTH: u16 = 150;
const LAUNCHER_HEIGHT: u16 = 30;
const LAUNCHER_LABEL: &str = "New Calculator";

const CASCADE_ORIGIN: (i32, i32) = (180, 20);
const CASCADE_STEP: i32 = 24;
const CASCADE_SLOTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Pixels per terminal column (rows carry twice as many).
    pub scale: u16,
    pub poll_interval: Duration,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            scale: 1,
            poll_interval: Duration::from_millis(16),
        }
    }
}

/// The demo desktop: a compositor with one launcher button that opens
/// calculators.
#[derive(Debug)]
pub struct DesktopApp {
    compositor: Compositor,
    launcher: WindowId,
    spawned: usize,
}

impl DesktopApp {
    pub fn new(width: u16, height: u16) -> Result<Self, CompositorError> {
        let mut compositor = Compositor::new(width, height)?;
        let root = compositor.root();
        let launcher = compositor.create_window(
            root,
            WindowSpec::undecorated(LAUNCHER_X, LAUNCHER_Y, LAUNCHER_WIDTH, LAUNCHER_HEIGHT),
            WindowKind::Button(Button::new()),
        )?;
        compositor.set_title(launcher, LAUNCHER_LABEL)?;
        compositor.paint_screen();
        Ok(Self {
            compositor,
            launcher,
            spawned: 0,
        })
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn compositor_mut(&mut self) -> &mut Compositor {
        &mut self.compositor
    }

    pub fn canvas(&self) -> &Canvas {
        self.compositor.canvas()
    }

    pub fn launcher(&self) -> WindowId {
        self.launcher
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// Feed one pointer sample through the desktop. A press on the launcher
    /// opens a calculator at the next cascade slot.
    pub fn handle_pointer(
        &mut self,
        sample: PointerSample,
    ) -> Result<DispatchOutcome, CompositorError> {
        let outcome = self.compositor.handle_pointer(sample)?;
        if outcome.reported(self.launcher, WidgetEvent::Clicked) {
            self.spawn_calculator()?;
        }
        Ok(outcome)
    }

    pub fn spawn_calculator(&mut self) -> Result<WindowId, CompositorError> {
        let (x, y) = self.cascade_slot();
        let root = self.compositor.root();
        let id = Calculator::spawn(&mut self.compositor, root, x, y)?;
        self.compositor.paint(id, None, true)?;
        self.compositor.draw_cursor();
        self.spawned += 1;
        tracing::debug!(window_id = ?id, x, y, spawned = self.spawned, "launched calculator");
        Ok(id)
    }

    fn cascade_slot(&self) -> (i32, i32) {
        let step = CASCADE_STEP * (self.spawned % CASCADE_SLOTS) as i32;
        let bounds = self.compositor.canvas().bounds();
        let max_x = (bounds.width() as i32 - Calculator::WIDTH as i32).max(0);
        let max_y = (bounds.height() as i32 - Calculator::HEIGHT as i32).max(0);
        (
            (CASCADE_ORIGIN.0 + step).min(max_x),
            (CASCADE_ORIGIN.1 + step).min(max_y),
        )
    }

    /// Full repaint, e.g. after the terminal was resized and lost its
    /// contents.
    pub fn repaint(&mut self) {
        self.compositor.paint_screen();
        self.compositor.draw_cursor();
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && match key.code {
            KeyCode::Char('q') => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
}

/// Run the desktop until `q` or `Ctrl+C`.
///
/// The buffer is sized to the output once at startup. Damage accumulated
/// while handling a burst of events is presented on the next idle tick.
pub fn run_desktop<I, O>(input: I, output: &mut O, config: DesktopConfig) -> io::Result<()>
where
    I: InputDriver,
    O: OutputDriver,
{
    output.enter()?;
    let result = drive(input, output, config);
    let exited = output.exit();
    result.and(exited)
}

fn drive<I, O>(input: I, output: &mut O, config: DesktopConfig) -> io::Result<()>
where
    I: InputDriver,
    O: OutputDriver,
{
    let (width, height) = output.pixel_size()?;
    let mut app = DesktopApp::new(width, height).map_err(io::Error::other)?;
    tracing::debug!(width, height, scale = config.scale, "desktop started");

    let mut translator = PointerTranslator::new(config.scale);
    let mut event_loop = EventLoop::new(input, config.poll_interval);
    event_loop.driver().set_mouse_capture(true)?;

    let result = event_loop.run(|_, event| {
        match event {
            None => {
                if let Some(damage) = app.compositor_mut().canvas_mut().take_damage() {
                    tracing::trace!(?damage, "present");
                    output.present(app.canvas())?;
                }
            }
            Some(Event::Key(key)) if is_quit(&key) => return Ok(ControlFlow::Quit),
            Some(Event::Mouse(mouse)) => {
                if let Some(sample) = translator.translate(&mouse) {
                    app.handle_pointer(sample).map_err(io::Error::other)?;
                }
            }
            Some(Event::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                app.repaint();
            }
            Some(_) => {}
        }
        Ok(ControlFlow::Continue)
    });

    let released = event_loop.driver().set_mouse_capture(false);
    result.and(released)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BUTTON_PRIMARY;

    fn click(app: &mut DesktopApp, x: u16, y: u16) -> DispatchOutcome {
        let out = app
            .handle_pointer(PointerSample {
                x,
                y,
                buttons: BUTTON_PRIMARY,
            })
            .unwrap();
        app.handle_pointer(PointerSample { x, y, buttons: 0 })
            .unwrap();
        out
    }

    #[test]
    fn launcher_opens_calculators_in_a_cascade() {
        let mut app = DesktopApp::new(800, 600).unwrap();
        let launcher = app.launcher();
        assert_eq!(app.compositor().window(launcher).unwrap().title(), Some(LAUNCHER_LABEL));

        let out = click(&mut app, 20, 20);
        assert!(out.reported(launcher, WidgetEvent::Clicked));
        assert_eq!(app.spawned(), 1);
        click(&mut app, 20, 20);
        assert_eq!(app.spawned(), 2);

        let c = app.compositor();
        let root = c.root();
        let children = c.window(root).unwrap().children();
        assert_eq!(children.len(), 3);
        // the second press raised the launcher above the first calculator
        assert_eq!(children[1], launcher);
        let calculators: Vec<_> = children
            .iter()
            .filter(|&&id| matches!(c.window(id).unwrap().kind(), WindowKind::Calculator(_)))
            .collect();
        let first = c.window(*calculators[0]).unwrap().position();
        let second = c.window(*calculators[1]).unwrap().position();
        assert_eq!(first, CASCADE_ORIGIN);
        assert_eq!(second, (first.0 + CASCADE_STEP, first.1 + CASCADE_STEP));
    }

    #[test]
    fn cascade_stays_on_small_screens() {
        let mut app = DesktopApp::new(200, 210).unwrap();
        let id = app.spawn_calculator().unwrap();
        let rect = app.compositor().screen_rect(id).unwrap();
        assert!(app.canvas().bounds().contains(&rect));
    }

    #[test]
    fn quit_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(is_quit(&q));
        assert!(is_quit(&ctrl_c));
        assert!(!is_quit(&c));
    }
}

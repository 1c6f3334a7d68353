use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pixel_wm::canvas::Canvas;
use pixel_wm::drivers::{InputDriver, OutputDriver};
use pixel_wm::runner::{DesktopConfig, run_desktop};
use pixel_wm::theme;

/// Replays events; a `None` entry makes one poll report an idle tick.
struct ScriptedInput {
    script: VecDeque<Option<Event>>,
    capture: Vec<bool>,
}

impl ScriptedInput {
    fn new(script: Vec<Option<Event>>) -> Self {
        Self {
            script: script.into(),
            capture: Vec::new(),
        }
    }
}

impl InputDriver for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        match self.script.front() {
            Some(Some(_)) => Ok(true),
            Some(None) => {
                self.script.pop_front();
                Ok(false)
            }
            None => Err(io::Error::other("script ran out before quitting")),
        }
    }

    fn read(&mut self) -> io::Result<Event> {
        match self.script.pop_front() {
            Some(Some(event)) => Ok(event),
            _ => Err(io::Error::other("read without a pending event")),
        }
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.capture.push(enabled);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingOutput {
    size: (u16, u16),
    entered: usize,
    exited: usize,
    frames: Vec<Vec<u32>>,
}

impl OutputDriver for RecordingOutput {
    fn enter(&mut self) -> io::Result<()> {
        self.entered += 1;
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        self.exited += 1;
        Ok(())
    }

    fn pixel_size(&self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        self.frames.push(canvas.pixels().to_vec());
        Ok(())
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Option<Event> {
    Some(Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Event> {
    Some(Event::Key(KeyEvent::new(code, modifiers)))
}

fn pixel(frame: &[u32], width: u16, x: usize, y: usize) -> u32 {
    frame[y * width as usize + x]
}

#[test]
fn launcher_click_is_presented_before_quit() {
    let mut input = ScriptedInput::new(vec![
        None,
        // cell (12, 6) at scale 1 is pixel (12, 12): the launcher
        mouse(MouseEventKind::Down(MouseButton::Left), 12, 6),
        mouse(MouseEventKind::Up(MouseButton::Left), 12, 6),
        None,
        key(KeyCode::Char('q'), KeyModifiers::NONE),
    ]);
    let mut output = RecordingOutput {
        size: (400, 300),
        ..Default::default()
    };

    run_desktop(&mut input, &mut output, DesktopConfig::default()).unwrap();

    assert_eq!((output.entered, output.exited), (1, 1));
    assert_eq!(input.capture, vec![true, false]);
    assert!(output.frames.len() >= 2);

    let first = &output.frames[0];
    assert_eq!(pixel(first, 400, 300, 100), theme::DESKTOP_BG);
    // a calculator opened at its cascade slot with an active titlebar
    let last = output.frames.last().unwrap();
    assert_eq!(pixel(last, 400, 300, 35), theme::TITLE_ACTIVE);
}

#[test]
fn idle_ticks_without_damage_do_not_present() {
    let mut input = ScriptedInput::new(vec![
        None,
        None,
        None,
        key(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ]);
    let mut output = RecordingOutput {
        size: (200, 100),
        ..Default::default()
    };
    run_desktop(&mut input, &mut output, DesktopConfig::default()).unwrap();
    assert_eq!(output.frames.len(), 1);
    assert_eq!(output.exited, 1);
}

#[test]
fn errors_still_restore_the_terminal() {
    let mut input = ScriptedInput::new(vec![None]);
    let mut output = RecordingOutput {
        size: (200, 100),
        ..Default::default()
    };
    assert!(run_desktop(&mut input, &mut output, DesktopConfig::default()).is_err());
    assert_eq!(output.exited, 1);
    assert_eq!(input.capture, vec![true, false]);
}

#[test]
fn empty_output_is_rejected() {
    let mut input = ScriptedInput::new(vec![key(KeyCode::Char('q'), KeyModifiers::NONE)]);
    let mut output = RecordingOutput::default();
    assert!(run_desktop(&mut input, &mut output, DesktopConfig::default()).is_err());
    assert_eq!((output.entered, output.exited), (1, 1));
    assert!(output.frames.is_empty());
}

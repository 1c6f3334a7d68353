pub mod console;
pub mod mouse;

use ::crossterm::event::Event;
use std::io;
use std::time::Duration;

use crate::canvas::Canvas;

/// One pointer report: position in buffer pixels plus a button bitmask
/// (`0` means no button held).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    pub x: u16,
    pub y: u16,
    pub buttons: u8,
}

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

pub trait OutputDriver {
    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    /// Size, in buffer pixels, of the surface this driver can show.
    fn pixel_size(&self) -> io::Result<(u16, u16)>;

    /// Show the current contents of `canvas`.
    fn present(&mut self, canvas: &Canvas) -> io::Result<()>;
}

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::Color;

use super::{InputDriver, OutputDriver};
use crate::canvas::Canvas;
use crate::term_color;

/// Upper half block: foreground paints the top pixel row of a cell,
/// background the bottom one.
const HALF_BLOCK: &str = "\u{2580}";

#[derive(Debug, Default)]
pub struct ConsoleInputDriver;

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self
    }
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableMouseCapture)
        } else {
            execute!(io::stdout(), DisableMouseCapture)
        }
    }
}

/// Presents the canvas on the terminal, two pixel rows per cell.
pub struct ConsoleOutputDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
    scale: u16,
    truecolor: bool,
}

impl ConsoleOutputDriver {
    pub fn new(scale: u16) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            entered: false,
            scale: scale.max(1),
            truecolor: term_color::truecolor_supported(),
        })
    }

    pub fn scale(&self) -> u16 {
        self.scale
    }
}

impl OutputDriver for ConsoleOutputDriver {
    fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        self.entered = true;
        tracing::debug!(scale = self.scale, truecolor = self.truecolor, "console entered");
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        self.entered = false;
        Ok(())
    }

    fn pixel_size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok(cells_to_pixels(cols, rows, self.scale))
    }

    fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        let (scale, truecolor) = (self.scale, self.truecolor);
        self.terminal
            .draw(|frame| {
                let area = frame.area();
                render_half_blocks(canvas, frame.buffer_mut(), area, scale, truecolor);
            })
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }
}

impl Drop for ConsoleOutputDriver {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Pixel extent of a `cols x rows` cell grid at `scale`.
pub fn cells_to_pixels(cols: u16, rows: u16, scale: u16) -> (u16, u16) {
    let scale = scale.max(1);
    (
        cols.saturating_mul(scale),
        rows.saturating_mul(scale.saturating_mul(2)),
    )
}

/// Sample `canvas` into `area` of `buf`, one upper-half block per cell.
///
/// Each cell samples the pixel at its top-left corner for the upper half
/// and `scale` rows further down for the lower half. Cells beyond the
/// canvas are blanked.
pub fn render_half_blocks(
    canvas: &Canvas,
    buf: &mut Buffer,
    area: CellRect,
    scale: u16,
    truecolor: bool,
) {
    let scale = i32::from(scale.max(1));
    for row in area.top()..area.bottom() {
        for col in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((col, row)) else {
                continue;
            };
            let x = i32::from(col - area.left()) * scale;
            let top = i32::from(row - area.top()) * 2 * scale;
            match (canvas.pixel(x, top), canvas.pixel(x, top + scale)) {
                (Some(upper), lower) => {
                    let lower = lower.unwrap_or(upper);
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(term_color::pixel_to_color(upper, truecolor))
                        .set_bg(term_color::pixel_to_color(lower, truecolor));
                }
                (None, _) => {
                    cell.set_symbol(" ").set_fg(Color::Reset).set_bg(Color::Reset);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn cell_grid_maps_to_pixels() {
        assert_eq!(cells_to_pixels(80, 24, 1), (80, 48));
        assert_eq!(cells_to_pixels(80, 24, 2), (160, 96));
        assert_eq!(cells_to_pixels(10, 10, 0), (10, 20));
    }

    #[test]
    fn half_blocks_carry_both_rows() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill_rect(0, 0, 4, 1, 0xFFFF_0000);
        canvas.fill_rect(0, 1, 4, 1, 0xFF00_00FF);
        let area = CellRect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        render_half_blocks(&canvas, &mut buf, area, 1, true);

        let cell = &buf[(1, 0)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(0xFF, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0xFF));
        // second row has no painted pixels yet
        assert_eq!(buf[(1, 1)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn cells_past_the_canvas_are_blank() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.fill_rect(0, 0, 2, 2, theme::WINDOW_BG);
        let area = CellRect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        render_half_blocks(&canvas, &mut buf, area, 1, true);
        assert_eq!(buf[(0, 0)].symbol(), HALF_BLOCK);
        assert_eq!(buf[(3, 0)].symbol(), " ");
        assert_eq!(buf[(0, 1)].symbol(), " ");
    }

    #[test]
    fn scale_skips_pixels() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill_rect(2, 0, 2, 4, 0xFF00_FF00);
        let area = CellRect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        render_half_blocks(&canvas, &mut buf, area, 2, true);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(1, 0)].fg, Color::Rgb(0, 0xFF, 0));
        assert_eq!(buf[(1, 0)].bg, Color::Rgb(0, 0xFF, 0));
    }
}

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::color::Rgb;
use crate::event::Event;
use crate::style::TextStyle;
use crate::text::char_width;

/// Raw-mode alternate-screen terminal with double-buffered, diffed output.
///
/// The terminal is restored when this value is dropped.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    /// Forces a full repaint on the next draw (first frame, after resize).
    invalidated: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            invalidated: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` for input and return every pending event.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.extend(Event::from_crossterm(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.extend(Event::from_crossterm(event::read()?));
            }
        }

        Ok(events)
    }

    /// Draw a frame. `paint` receives a cleared buffer the size of the screen.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("terminal resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            self.invalidated = true;
        }

        self.current_buffer.clear();
        paint(&mut self.current_buffer);

        if self.invalidated {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            // Make every cell differ from the previous frame
            for y in 0..height {
                for x in 0..width {
                    self.previous_buffer.set(x, y, Cell::new('\0'));
                }
            }
            self.invalidated = false;
        }

        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            if cell.style != last_style {
                // Attributes do not switch off individually on every terminal
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                queue!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

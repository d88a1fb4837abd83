//! Terminal abstraction using crossterm

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, MouseEvent},
    execute, queue,
    style::{self as term_style, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::error::Result;
use crate::highlight::{Color, Style};

/// Input events the host cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize(u16, u16),
}

/// Terminal wrapper for cross-platform terminal I/O
pub struct Terminal {
    /// Terminal width in columns
    cols: u16,
    /// Terminal height in rows
    rows: u16,
}

impl Terminal {
    /// Create a new terminal instance and enter raw mode
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let (cols, rows) = terminal::size()?;

        let term = Self { cols, rows };
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableBracketedPaste,
            event::EnableMouseCapture
        )?;

        Ok(term)
    }

    /// Get terminal width
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get terminal height
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Clear the entire screen
    pub fn clear_screen(&mut self) -> Result<()> {
        queue!(io::stdout(), terminal::Clear(ClearType::All))?;
        Ok(())
    }

    /// Clear from cursor to end of line
    pub fn clear_to_eol(&mut self) -> Result<()> {
        queue!(io::stdout(), terminal::Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    /// Move cursor to position (0-indexed)
    pub fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        queue!(io::stdout(), cursor::MoveTo(col, row))?;
        Ok(())
    }

    /// Write a string at current cursor position
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        queue!(io::stdout(), Print(s))?;
        Ok(())
    }

    /// Flush output buffer to terminal
    pub fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    /// Set cursor visibility
    pub fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            queue!(io::stdout(), cursor::Show)?;
        } else {
            queue!(io::stdout(), cursor::Hide)?;
        }
        Ok(())
    }

    /// Read the next relevant event (blocking)
    pub fn read_event(&mut self) -> Result<TerminalEvent> {
        loop {
            match event::read()? {
                Event::Key(key_event) => return Ok(TerminalEvent::Key(key_event)),
                Event::Mouse(mouse_event) => return Ok(TerminalEvent::Mouse(mouse_event)),
                Event::Paste(text) => return Ok(TerminalEvent::Paste(text)),
                Event::Resize(cols, rows) => {
                    self.cols = cols;
                    self.rows = rows;
                    return Ok(TerminalEvent::Resize(cols, rows));
                }
                _ => {
                    // Ignore focus events
                }
            }
        }
    }

    /// Apply a highlight style to subsequent output
    pub fn apply_style(&mut self, style: &Style) -> Result<()> {
        let mut out = io::stdout();
        if style.fg != Color::Default {
            queue!(out, SetForegroundColor(to_term_color(style.fg)))?;
        }
        if style.bg != Color::Default {
            queue!(out, SetBackgroundColor(to_term_color(style.bg)))?;
        }
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }

    /// Set dim/faint mode (for the placeholder, status line)
    pub fn set_dim(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            queue!(io::stdout(), SetAttribute(Attribute::Dim))?;
        } else {
            queue!(io::stdout(), SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }

    /// Set reverse video mode
    pub fn set_reverse(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            queue!(io::stdout(), SetAttribute(Attribute::Reverse))?;
        } else {
            queue!(io::stdout(), SetAttribute(Attribute::NoReverse))?;
        }
        Ok(())
    }

    /// Reset all attributes
    pub fn reset_attributes(&mut self) -> Result<()> {
        queue!(io::stdout(), SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            event::DisableBracketedPaste,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Map a highlight color onto the terminal palette
pub fn to_term_color(color: Color) -> term_style::Color {
    match color {
        Color::Default => term_style::Color::Reset,
        Color::Black => term_style::Color::Black,
        Color::Red => term_style::Color::DarkRed,
        Color::Green => term_style::Color::DarkGreen,
        Color::Yellow => term_style::Color::DarkYellow,
        Color::Blue => term_style::Color::DarkBlue,
        Color::Magenta => term_style::Color::DarkMagenta,
        Color::Cyan => term_style::Color::DarkCyan,
        Color::White => term_style::Color::Grey,
        Color::BrightBlack => term_style::Color::DarkGrey,
        Color::BrightRed => term_style::Color::Red,
        Color::BrightGreen => term_style::Color::Green,
        Color::BrightYellow => term_style::Color::Yellow,
        Color::BrightBlue => term_style::Color::Blue,
        Color::BrightMagenta => term_style::Color::Magenta,
        Color::BrightCyan => term_style::Color::Cyan,
        Color::BrightWhite => term_style::Color::White,
        Color::Rgb(r, g, b) => term_style::Color::Rgb { r, g, b },
    }
}

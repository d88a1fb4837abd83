//! Display rendering for the terminal host
//!
//! Draws the highlight surface, never the input surface: the input surface
//! only contributes the caret position. Both share the same scroll offset, so
//! the caret lands on the glyph it belongs to.

use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::highlight::markup::Run;
use crate::host::terminal::Terminal;
use crate::textarea::PrettyTextarea;

/// Display state
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
    /// Message to show in the status line
    message: Option<String>,
}

impl Display {
    pub fn new() -> Self {
        Self {
            needs_redraw: true,
            message: None,
        }
    }

    /// Mark that a full redraw is needed
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Set a message to display
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Render the component with its status line
    pub fn render(&mut self, terminal: &mut Terminal, textarea: &PrettyTextarea) -> Result<()> {
        if self.needs_redraw {
            terminal.clear_screen()?;
        }
        terminal.set_cursor_visible(false)?;

        let input = textarea.input();
        let rows = (input.rows() as usize).min(terminal.rows().saturating_sub(1) as usize);
        let cols = (input.cols() as usize).min(terminal.cols() as usize);

        let highlight = textarea.highlight();
        let scroll = highlight.scroll();
        let top = scroll.top.max(0.0) as usize;
        let left = scroll.left.max(0.0) as usize;

        let lines = highlight.lines();
        for row in 0..rows {
            terminal.move_cursor(row as u16, 0)?;
            if input.value().is_empty() && row == 0 {
                terminal.set_dim(true)?;
                terminal.write_str(&truncate_to_width(input.placeholder(), cols))?;
                terminal.set_dim(false)?;
            } else if let Some(line) = lines.get(top + row) {
                render_line(terminal, line, left, cols)?;
            }
            terminal.clear_to_eol()?;
        }

        let width = terminal.cols() as usize;
        self.render_status(terminal, textarea, rows as u16, width)?;

        let (line, col) = input.caret_line_col();
        if line >= top && line < top + rows && col >= left && col - left < cols {
            terminal.move_cursor((line - top) as u16, (col - left) as u16)?;
            terminal.set_cursor_visible(true)?;
        }
        terminal.flush()?;

        self.needs_redraw = false;
        Ok(())
    }

    /// Render the status line under the text box
    fn render_status(
        &self,
        terminal: &mut Terminal,
        textarea: &PrettyTextarea,
        row: u16,
        cols: usize,
    ) -> Result<()> {
        let input = textarea.input();
        let (line, col) = input.caret_line_col();
        let count = match input.max_length() {
            Some(max) => format!("{}/{}", input.char_count(), max),
            None => input.char_count().to_string(),
        };
        let selected = input
            .selected_text()
            .map(|s| format!(" [{} selected]", s.chars().count()))
            .unwrap_or_default();
        let message = self.message.as_deref().unwrap_or("C-q quit");
        let status = format!(
            "-- pretty-textarea: {} chars L{} C{}{} -- {}",
            count,
            line + 1,
            col + 1,
            selected,
            message
        );

        terminal.move_cursor(row, 0)?;
        terminal.set_reverse(true)?;
        let padded = truncate_to_width(&status, cols);
        let fill = cols.saturating_sub(display_width(&padded));
        terminal.write_str(&padded)?;
        terminal.write_str(&" ".repeat(fill))?;
        terminal.set_reverse(false)?;
        terminal.clear_to_eol()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one line of runs, skipping `left` columns and clipping at `cols`
fn render_line(terminal: &mut Terminal, line: &[Run], left: usize, cols: usize) -> Result<()> {
    let mut col = 0;
    for run in line {
        let visible = clip_columns(&run.text, &mut col, left, left + cols);
        if visible.is_empty() {
            continue;
        }
        if run.style.is_default() {
            terminal.write_str(&visible)?;
        } else {
            terminal.apply_style(&run.style)?;
            terminal.write_str(&visible)?;
            terminal.reset_attributes()?;
        }
    }
    Ok(())
}

/// Keep the characters of `text` whose columns fall in `[from, to)`
///
/// `col` is the running column at the start of `text` and is advanced past it.
fn clip_columns(text: &str, col: &mut usize, from: usize, to: usize) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        let width = char_width(ch);
        if *col >= from && *col + width <= to {
            out.push(ch);
        }
        *col += width;
    }
    out
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(1)
}

fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

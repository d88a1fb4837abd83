//! The input surface
//!
//! The interactive layer: it owns the text value, the caret and selection,
//! and the scroll offset. Its glyphs are drawn transparent with a visible
//! caret; the highlight surface underneath supplies the visible text.

use std::borrow::Cow;
use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::scroll::{self, ScrollOffset};
use crate::metrics::{BoxSize, SurfaceStyle};

/// Default visible row count
pub const DEFAULT_ROWS: u32 = 4;
/// Default visible column count
pub const DEFAULT_COLS: u32 = 50;

/// Caret motions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretMotion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    TextStart,
    TextEnd,
}

/// Interactive text entry surface
#[derive(Debug, Clone)]
pub struct InputSurface {
    /// The authoritative value
    value: String,
    /// Caret byte offset, always on a char boundary
    caret: usize,
    /// Selection anchor; the selection spans anchor..caret
    anchor: Option<usize>,
    /// Display column kept across vertical motion
    goal_col: Option<usize>,
    placeholder: String,
    rows: u32,
    cols: u32,
    /// Maximum character count; `None` is unlimited
    max_length: Option<usize>,
    style: SurfaceStyle,
    /// Content width reported by the host layout, if any
    client_width: Option<f32>,
    scroll: ScrollOffset,
}

impl InputSurface {
    /// Create an empty surface with default rows and cols
    pub fn new() -> Self {
        Self {
            value: String::new(),
            caret: 0,
            anchor: None,
            goal_col: None,
            placeholder: String::new(),
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            max_length: None,
            style: SurfaceStyle::default(),
            client_width: None,
            scroll: ScrollOffset::default(),
        }
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value programmatically
    ///
    /// `None` becomes the empty string and line endings are normalized to LF.
    /// The max-length limit applies to user edits only, not here. The caret
    /// moves to the end and any selection is dropped.
    pub fn set_value(&mut self, text: Option<&str>) {
        self.value = normalize_newlines(text.unwrap_or_default()).into_owned();
        self.caret = self.value.len();
        self.anchor = None;
        self.goal_col = None;
        self.clamp_scroll();
    }

    /// Number of characters in the value
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Number of lines (an empty value has one)
    pub fn line_count(&self) -> usize {
        self.value.split('\n').count()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn set_rows(&mut self, rows: u32) {
        self.rows = rows;
        self.clamp_scroll();
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn set_cols(&mut self, cols: u32) {
        self.cols = cols;
        self.clamp_scroll();
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Set the limit; `None` removes it entirely
    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
    }

    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
        self.clamp_scroll();
    }

    // =========================================================================
    // Box metrics
    // =========================================================================

    /// Outer box derived from rows, cols and font metrics
    pub fn box_size(&self) -> BoxSize {
        BoxSize::for_grid(self.rows, self.cols, &self.style)
    }

    /// Visible content width
    pub fn client_width(&self) -> f32 {
        self.client_width.unwrap_or_else(|| self.box_size().width)
    }

    /// Record the content width measured by the host layout
    pub fn set_client_width(&mut self, width: Option<f32>) {
        self.client_width = width;
        self.clamp_scroll();
    }

    fn client_height(&self) -> f32 {
        self.box_size().height
    }

    fn content_size(&self) -> BoxSize {
        let widest = self.value.split('\n').map(|l| l.width()).max().unwrap_or(0);
        BoxSize {
            // One extra cell so the caret fits after the last character
            width: (widest + 1) as f32 * self.style.char_width,
            height: self.line_count() as f32 * self.style.line_height,
        }
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    /// Scroll to `offset`, clamped to the scrollable range
    ///
    /// Returns true if the offset changed, which is when a scroll event fires.
    pub fn scroll_to(&mut self, offset: ScrollOffset) -> bool {
        let content = self.content_size();
        let clamped = offset.clamped(
            content.height - self.client_height(),
            content.width - self.client_width(),
        );
        let changed = clamped != self.scroll;
        self.scroll = clamped;
        changed
    }

    /// Scroll by a delta
    pub fn scroll_by(&mut self, top: f32, left: f32) -> bool {
        let current = self.scroll;
        self.scroll_to(ScrollOffset::new(current.top + top, current.left + left))
    }

    /// Scroll just enough to keep the caret inside the viewport
    pub fn reveal_caret(&mut self) -> bool {
        let (line, col) = self.caret_line_col();
        let style = &self.style;
        let top = scroll::reveal(
            self.scroll.top,
            line as f32 * style.line_height,
            style.line_height,
            self.client_height(),
        );
        let left = scroll::reveal(
            self.scroll.left,
            col as f32 * style.char_width,
            style.char_width,
            self.client_width(),
        );
        self.scroll_to(ScrollOffset::new(top, left))
    }

    fn clamp_scroll(&mut self) {
        self.scroll_to(self.scroll);
    }

    // =========================================================================
    // Caret & selection
    // =========================================================================

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Selected byte range, if any non-empty selection exists
    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        let range = anchor.min(self.caret)..anchor.max(self.caret);
        (!range.is_empty()).then_some(range)
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection().map(|r| &self.value[r])
    }

    /// Select a byte range; offsets are clamped to char boundaries
    pub fn select(&mut self, start: usize, end: usize) {
        let start = clamp_to_char_boundary(&self.value, start);
        let end = clamp_to_char_boundary(&self.value, end);
        self.anchor = Some(start);
        self.caret = end;
        self.goal_col = None;
    }

    pub fn select_all(&mut self) {
        self.select(0, self.value.len());
    }

    /// Place the caret, optionally extending the selection
    pub fn set_caret(&mut self, pos: usize, extend: bool) {
        let pos = clamp_to_char_boundary(&self.value, pos);
        if extend {
            self.anchor.get_or_insert(self.caret);
        } else {
            self.anchor = None;
        }
        self.caret = pos;
    }

    /// Caret position as (line, display column)
    pub fn caret_line_col(&self) -> (usize, usize) {
        let before = &self.value[..self.caret];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, before[line_start..].width())
    }

    /// Move the caret; `extend` grows the selection instead of clearing it
    pub fn move_caret(&mut self, motion: CaretMotion, extend: bool) {
        if !extend {
            // Collapsing a selection with left/right lands on its edge
            if let Some(range) = self.selection() {
                match motion {
                    CaretMotion::Left => {
                        self.set_caret(range.start, false);
                        return;
                    }
                    CaretMotion::Right => {
                        self.set_caret(range.end, false);
                        return;
                    }
                    _ => {}
                }
            }
        }

        let keep_goal = matches!(motion, CaretMotion::Up | CaretMotion::Down);
        let target = match motion {
            CaretMotion::Left => prev_boundary(&self.value, self.caret),
            CaretMotion::Right => next_boundary(&self.value, self.caret),
            CaretMotion::LineStart => self.line_start(self.caret),
            CaretMotion::LineEnd => self.line_end(self.caret),
            CaretMotion::TextStart => 0,
            CaretMotion::TextEnd => self.value.len(),
            CaretMotion::Up | CaretMotion::Down => {
                let goal = match self.goal_col {
                    Some(goal) => goal,
                    None => self.value[self.line_start(self.caret)..self.caret].width(),
                };
                self.goal_col = Some(goal);
                self.vertical_target(motion == CaretMotion::Up, goal)
            }
        };

        self.set_caret(target, extend);
        if !keep_goal {
            self.goal_col = None;
        }
    }

    fn line_start(&self, pos: usize) -> usize {
        self.value[..pos].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.value[pos..].find('\n').map_or(self.value.len(), |i| pos + i)
    }

    fn vertical_target(&self, up: bool, goal: usize) -> usize {
        let start = self.line_start(self.caret);
        let target_start = if up {
            if start == 0 {
                return 0;
            }
            self.line_start(start - 1)
        } else {
            let end = self.line_end(self.caret);
            if end == self.value.len() {
                return self.value.len();
            }
            end + 1
        };
        let target_end = self.line_end(target_start);
        col_to_byte(&self.value[target_start..target_end], goal) + target_start
    }

    // =========================================================================
    // User edits
    //
    // Each returns whether the value changed, i.e. whether the host should
    // see an input notification.
    // =========================================================================

    /// Insert typed or pasted text at the caret, replacing any selection
    ///
    /// With a max length configured, the inserted text is cut short so the
    /// value never grows past the limit.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let text = normalize_newlines(text);
        let selection = self.selection().unwrap_or(self.caret..self.caret);
        let mut inserted: &str = &text;

        if let Some(max) = self.max_length {
            let removed = self.value[selection.clone()].chars().count();
            let remaining = max.saturating_sub(self.char_count() - removed);
            if let Some((cut, _)) = inserted.char_indices().nth(remaining) {
                inserted = &inserted[..cut];
            }
        }

        if inserted.is_empty() && selection.is_empty() {
            return false;
        }

        self.value.replace_range(selection.clone(), inserted);
        self.caret = selection.start + inserted.len();
        self.anchor = None;
        self.goal_col = None;
        true
    }

    /// Paste clipboard text
    pub fn paste(&mut self, text: &str) -> bool {
        self.insert_text(text)
    }

    /// Remove and return the selected text
    pub fn cut(&mut self) -> Option<String> {
        let range = self.selection()?;
        let removed = self.value[range.clone()].to_string();
        self.remove(range);
        Some(removed)
    }

    /// Backspace: delete the selection or the character before the caret
    pub fn delete_backward(&mut self) -> bool {
        let range = match self.selection() {
            Some(range) => range,
            None => prev_boundary(&self.value, self.caret)..self.caret,
        };
        self.remove(range)
    }

    /// Delete: delete the selection or the character after the caret
    pub fn delete_forward(&mut self) -> bool {
        let range = match self.selection() {
            Some(range) => range,
            None => self.caret..next_boundary(&self.value, self.caret),
        };
        self.remove(range)
    }

    fn remove(&mut self, range: Range<usize>) -> bool {
        self.anchor = None;
        self.goal_col = None;
        if range.is_empty() {
            return false;
        }
        self.value.replace_range(range.clone(), "");
        self.caret = range.start;
        self.clamp_scroll();
        true
    }
}

impl Default for InputSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize line endings (CRLF and CR to LF)
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}

fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn prev_boundary(s: &str, i: usize) -> usize {
    s[..i].char_indices().last().map_or(0, |(idx, _)| idx)
}

fn next_boundary(s: &str, i: usize) -> usize {
    s[i..].chars().next().map_or(s.len(), |ch| i + ch.len_utf8())
}

/// Byte offset of the first character at or past display column `col`
fn col_to_byte(line: &str, col: usize) -> usize {
    let mut current = 0;
    for (byte_idx, ch) in line.char_indices() {
        if current >= col {
            return byte_idx;
        }
        current += ch.width().unwrap_or(1);
    }
    line.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{derive_metrics, HostStyle};

    fn surface(text: &str) -> InputSurface {
        let mut input = InputSurface::new();
        input.set_style(derive_metrics(&HostStyle::terminal()));
        input.set_value(Some(text));
        input
    }

    #[test]
    fn test_defaults() {
        let input = InputSurface::new();
        assert_eq!(input.value(), "");
        assert_eq!(input.rows(), 4);
        assert_eq!(input.cols(), 50);
        assert_eq!(input.max_length(), None);
    }

    #[test]
    fn test_set_value_normalizes() {
        let mut input = InputSurface::new();
        input.set_value(None);
        assert_eq!(input.value(), "");
        input.set_value(Some("a\r\nb\rc"));
        assert_eq!(input.value(), "a\nb\nc");
        assert_eq!(input.caret(), 5);
    }

    #[test]
    fn test_set_value_ignores_max_length() {
        let mut input = InputSurface::new();
        input.set_max_length(Some(2));
        input.set_value(Some("abcdef"));
        assert_eq!(input.value(), "abcdef");
    }

    #[test]
    fn test_typing_respects_max_length() {
        let mut input = surface("");
        input.set_max_length(Some(3));
        for ch in ["a", "b", "c"] {
            assert!(input.insert_text(ch));
        }
        assert!(!input.insert_text("d"));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_paste_truncated_to_max_length() {
        let mut input = surface("ab");
        input.set_max_length(Some(4));
        assert!(input.paste("cdef"));
        assert_eq!(input.value(), "abcd");
    }

    #[test]
    fn test_max_length_counts_replaced_selection() {
        let mut input = surface("abc");
        input.set_max_length(Some(3));
        input.select(1, 3);
        assert!(input.insert_text("xyz"));
        assert_eq!(input.value(), "axy");
    }

    #[test]
    fn test_removing_max_length() {
        let mut input = surface("");
        input.set_max_length(Some(0));
        assert!(!input.insert_text("a"));
        input.set_max_length(None);
        assert!(input.insert_text("abc"));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_cut_and_delete() {
        let mut input = surface("hello world");
        input.select(0, 6);
        assert_eq!(input.selected_text(), Some("hello "));
        assert_eq!(input.cut(), Some("hello ".to_string()));
        assert_eq!(input.value(), "world");
        assert_eq!(input.cut(), None);

        input.set_caret(0, false);
        assert!(!input.delete_backward());
        assert!(input.delete_forward());
        assert_eq!(input.value(), "orld");
        input.move_caret(CaretMotion::TextEnd, false);
        assert!(input.delete_backward());
        assert_eq!(input.value(), "orl");
        assert!(!input.delete_forward());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = surface("a€b");
        input.move_caret(CaretMotion::Left, false);
        input.move_caret(CaretMotion::Left, false);
        assert_eq!(input.caret(), 1);
        assert!(input.delete_forward());
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_vertical_motion_keeps_column() {
        let mut input = surface("abcdef\nab\nabcdef");
        input.set_caret(5, false);
        input.move_caret(CaretMotion::Down, false);
        assert_eq!(input.caret_line_col(), (1, 2));
        input.move_caret(CaretMotion::Down, false);
        assert_eq!(input.caret_line_col(), (2, 5));
        input.move_caret(CaretMotion::Up, false);
        input.move_caret(CaretMotion::Up, false);
        assert_eq!(input.caret_line_col(), (0, 5));
        input.move_caret(CaretMotion::Up, false);
        assert_eq!(input.caret(), 0);
    }

    #[test]
    fn test_selection_collapse() {
        let mut input = surface("abcd");
        input.select(1, 3);
        input.move_caret(CaretMotion::Left, false);
        assert_eq!(input.caret(), 1);
        assert_eq!(input.selection(), None);

        input.move_caret(CaretMotion::Right, true);
        input.move_caret(CaretMotion::Right, true);
        assert_eq!(input.selection(), Some(1..3));
    }

    #[test]
    fn test_scroll_clamped_to_content() {
        let mut input = surface("1\n2\n3\n4\n5\n6\n7\n8");
        input.set_cols(10);
        assert!(input.scroll_to(ScrollOffset::new(100.0, 100.0)));
        // 8 lines, 4 visible rows; no line wider than the box
        assert_eq!(input.scroll(), ScrollOffset::new(4.0, 0.0));
        assert!(!input.scroll_to(ScrollOffset::new(4.0, 0.0)));
    }

    #[test]
    fn test_reveal_caret() {
        let mut input = surface("1\n2\n3\n4\n5\n6\n7\n8");
        input.set_caret(0, false);
        input.scroll_to(ScrollOffset::new(4.0, 0.0));
        assert!(input.reveal_caret());
        assert_eq!(input.scroll().top, 0.0);

        input.move_caret(CaretMotion::TextEnd, false);
        assert!(input.reveal_caret());
        assert_eq!(input.scroll().top, 4.0);
    }

    #[test]
    fn test_client_width_override() {
        let mut input = surface("");
        assert_eq!(input.client_width(), 50.0);
        input.set_client_width(Some(42.0));
        assert_eq!(input.client_width(), 42.0);
        input.set_client_width(None);
        assert_eq!(input.client_width(), 50.0);
    }
}

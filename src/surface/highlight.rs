//! The highlight surface
//!
//! A passive view: it holds the generated markup and mirrors metrics and
//! scroll offset from the input surface. Nothing here is ever set from user
//! interaction.

use super::scroll::ScrollOffset;
use crate::highlight::markup::{self, Run};
use crate::metrics::{BoxSize, SurfaceStyle};

/// Non-interactive layer showing the decorated text
#[derive(Debug, Clone, Default)]
pub struct HighlightSurface {
    markup: String,
    style: SurfaceStyle,
    size: BoxSize,
    scroll: ScrollOffset,
}

impl HighlightSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup content
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub(crate) fn set_markup(&mut self, markup: String) {
        self.markup = markup;
    }

    /// Markup with all tags removed
    pub fn rendered_text(&self) -> String {
        markup::strip(&self.markup)
    }

    /// Markup split into lines of styled runs
    pub fn lines(&self) -> Vec<Vec<Run>> {
        markup::parse_lines(&self.markup)
    }

    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    pub(crate) fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
    }

    pub fn size(&self) -> BoxSize {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: BoxSize) {
        self.size = size;
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    /// Copy the input surface's offset verbatim
    pub(crate) fn mirror_scroll(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }
}

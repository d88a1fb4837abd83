//! Font and box metrics shared by both surfaces
//!
//! The host's resolved style is projected once into a [`SurfaceStyle`] and the
//! same value is pushed to the input and highlight surfaces, so glyph
//! positions line up exactly.

/// Resolved style of the hosting element
#[derive(Debug, Clone, PartialEq)]
pub struct HostStyle {
    /// Font size in pixels (cells for terminal hosts)
    pub font_size: f32,
    /// Font family list as resolved by the host
    pub font_family: String,
    /// Advance width of one character
    pub char_width: f32,
    /// Height of one line
    pub line_height: f32,
}

impl HostStyle {
    /// Style of a character-cell terminal: one unit per cell
    pub fn terminal() -> Self {
        Self {
            font_size: 1.0,
            font_family: "monospace".to_string(),
            char_width: 1.0,
            line_height: 1.0,
        }
    }
}

impl Default for HostStyle {
    fn default() -> Self {
        Self {
            font_size: 13.0,
            font_family: "monospace".to_string(),
            char_width: 7.8,
            line_height: 15.0,
        }
    }
}

/// Font metrics applied to a surface
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceStyle {
    pub font_size: f32,
    pub font_family: String,
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        derive_metrics(&HostStyle::default())
    }
}

/// Project the host's resolved style onto a surface style
pub fn derive_metrics(host: &HostStyle) -> SurfaceStyle {
    SurfaceStyle {
        font_size: host.font_size,
        font_family: host.font_family.clone(),
        char_width: host.char_width,
        line_height: host.line_height,
    }
}

/// Outer box size of a surface
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
}

impl BoxSize {
    /// Box for a `rows` x `cols` character grid in the given font
    pub fn for_grid(rows: u32, cols: u32, style: &SurfaceStyle) -> Self {
        Self {
            width: cols as f32 * style.char_width,
            height: rows as f32 * style.line_height,
        }
    }
}

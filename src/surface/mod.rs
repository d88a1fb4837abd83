//! The two stacked surfaces
//!
//! The input surface is the single authority for the value and the scroll
//! offset. The highlight surface only ever receives copies.

mod highlight;
mod input;
mod scroll;

pub use highlight::HighlightSurface;
pub use input::{normalize_newlines, CaretMotion, InputSurface, DEFAULT_COLS, DEFAULT_ROWS};
pub use scroll::ScrollOffset;

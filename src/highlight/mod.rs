//! Highlighting module
//!
//! This module provides the pattern-to-markup pipeline:
//! - Rule parsing and compilation
//! - Markup rendering for the highlight surface
//! - Reading markup back into styled runs for drawing

pub mod markup;
mod render;
mod rules;
mod style;

pub use render::{
    escape, render_markup, render_plain, render_with_rules, ENTITIES, LINE_BREAK, TRAILING_FILLER,
};
pub use rules::{CompiledRule, HighlightRule, HighlightRuleSet};
pub use style::{Color, Style};

//! pretty-textarea - a multi-line text input with inline pattern highlighting
//!
//! The component stacks two surfaces that must always agree: an editable
//! input surface with transparent glyphs and a highlight surface that shows
//! the same text as styled markup. See [`PrettyTextarea`].

pub mod attributes;
pub mod config;
pub mod error;
pub mod event;
pub mod highlight;
pub mod host;
pub mod metrics;
pub mod registry;
pub mod surface;
pub mod textarea;

pub use attributes::Attributes;
pub use config::HostConfig;
pub use error::{Result, TextareaError};
pub use event::{EventSink, InputEvent, INPUT_EVENT};
pub use highlight::{HighlightRule, HighlightRuleSet};
pub use metrics::{HostStyle, SurfaceStyle};
pub use surface::{CaretMotion, HighlightSurface, InputSurface, ScrollOffset};
pub use textarea::{Lifecycle, PrettyTextarea, TAG_NAME};

/// Define the `pretty-textarea` element
///
/// Safe to call any number of times; only the first call defines the tag.
pub fn register() -> Result<()> {
    if registry::is_defined(TAG_NAME) {
        return Ok(());
    }
    match registry::define(TAG_NAME, PrettyTextarea::new) {
        Err(TextareaError::AlreadyDefined(_)) => Ok(()),
        other => other,
    }
}

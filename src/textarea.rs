//! The textarea component and its sync controller
//!
//! `PrettyTextarea` stacks a highlight surface under an input surface and
//! keeps them identical:
//! - metrics are derived once from the host style and pushed to both
//! - every scroll of the input surface is copied to the highlight surface
//! - every value or rule change regenerates the highlight markup
//!
//! For a user edit the order is fixed: the value mutates, the markup
//! regenerates, then the `input` event fires. Listeners therefore always
//! observe an up-to-date highlight surface.

use crate::attributes::{self, Attributes};
use crate::event::{EventSink, InputEvent, Listeners};
use crate::highlight::{markup, render_markup};
use crate::metrics::{derive_metrics, BoxSize, HostStyle};
use crate::surface::{CaretMotion, HighlightSurface, InputSurface, ScrollOffset};

/// Tag the component registers under
pub const TAG_NAME: &str = "pretty-textarea";

/// Component lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not yet in a live tree; attribute changes are only stored
    Detached,
    /// Live: all syncing active
    Attached,
}

/// Multi-line text input with inline pattern highlighting
#[derive(Debug)]
pub struct PrettyTextarea {
    attributes: Attributes,
    input: InputSurface,
    highlight: HighlightSurface,
    host_style: HostStyle,
    lifecycle: Lifecycle,
    listeners: Listeners,
}

impl PrettyTextarea {
    /// Create a detached component with no attributes
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(),
            input: InputSurface::new(),
            highlight: HighlightSurface::new(),
            host_style: HostStyle::default(),
            lifecycle: Lifecycle::Detached,
            listeners: Listeners::new(),
        }
    }

    /// Create a detached component with initial attributes
    pub fn with_attributes(attributes: Attributes) -> Self {
        let mut textarea = Self::new();
        textarea.input.set_value(Some(attributes.value()));
        textarea.attributes = attributes;
        textarea
    }

    // =========================================================================
    // Lifecycle hooks
    // =========================================================================

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_attached(&self) -> bool {
        self.lifecycle == Lifecycle::Attached
    }

    /// The host attached the component with its resolved style
    ///
    /// The first call moves the component to `Attached`; later calls only
    /// re-sync against the new style.
    pub fn connected(&mut self, host_style: HostStyle) {
        if self.lifecycle == Lifecycle::Detached {
            log::debug!("{} attached", TAG_NAME);
            self.lifecycle = Lifecycle::Attached;
        }
        self.host_style = host_style;
        self.update_attributes();
    }

    /// An attribute was set (`Some`) or removed (`None`)
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.attributes.set(name, value),
            None => self.attributes.remove(name),
        };

        if !attributes::is_observed(name) {
            return;
        }
        if self.is_attached() {
            log::trace!("attribute {} changed", name);
            self.update_attributes();
        }
    }

    /// Convenience for `attribute_changed(name, Some(value))`
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attribute_changed(name, Some(value));
    }

    /// Convenience for `attribute_changed(name, None)`
    pub fn remove_attribute(&mut self, name: &str) {
        self.attribute_changed(name, None);
    }

    /// The host's resolved style changed
    pub fn style_changed(&mut self, host_style: HostStyle) {
        self.host_style = host_style;
        if self.is_attached() {
            self.update_attributes();
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    // =========================================================================
    // Value property
    // =========================================================================

    /// Current value, empty if never set
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Assign the value programmatically
    ///
    /// Updates both surfaces and mirrors the value into the `value`
    /// attribute. No `input` event is emitted, so bindings that write the
    /// value back in response to that event cannot loop.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.input.set_value(value);
        let value = self.input.value().to_string();
        self.attribute_changed(attributes::VALUE, Some(&value));
    }

    /// Register an observer for `input` events
    pub fn add_listener(&mut self, sink: impl EventSink + 'static) {
        self.listeners.add(sink);
    }

    // =========================================================================
    // Surfaces
    // =========================================================================

    pub fn input(&self) -> &InputSurface {
        &self.input
    }

    pub fn highlight(&self) -> &HighlightSurface {
        &self.highlight
    }

    /// Current highlight markup
    pub fn markup(&self) -> &str {
        self.highlight.markup()
    }

    /// Check that both surfaces agree on text, scroll offset and metrics
    pub fn is_in_sync(&self) -> bool {
        markup::strip(self.highlight.markup()) == self.input.value()
            && self.highlight.scroll() == self.input.scroll()
            && self.highlight.style() == self.input.style()
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    /// Typed text at the caret
    pub fn type_text(&mut self, text: &str) -> bool {
        self.user_edit(|input| input.insert_text(text))
    }

    /// A line break from the keyboard
    pub fn type_newline(&mut self) -> bool {
        self.type_text("\n")
    }

    /// Pasted text at the caret
    pub fn paste(&mut self, text: &str) -> bool {
        self.user_edit(|input| input.paste(text))
    }

    /// Cut the selection, returning the removed text
    pub fn cut(&mut self) -> Option<String> {
        let mut removed = None;
        self.user_edit(|input| {
            removed = input.cut();
            removed.is_some()
        });
        removed
    }

    /// Backspace
    pub fn delete_backward(&mut self) -> bool {
        self.user_edit(InputSurface::delete_backward)
    }

    /// Forward delete
    pub fn delete_forward(&mut self) -> bool {
        self.user_edit(InputSurface::delete_forward)
    }

    /// Move the caret, scrolling it into view
    pub fn move_caret(&mut self, motion: CaretMotion, extend: bool) {
        self.input.move_caret(motion, extend);
        if self.input.reveal_caret() {
            self.on_scroll();
        }
    }

    pub fn select(&mut self, start: usize, end: usize) {
        self.input.select(start, end);
    }

    pub fn select_all(&mut self) {
        self.input.select_all();
    }

    /// Scroll the input surface (wheel, scrollbar, touch)
    pub fn scroll_input(&mut self, offset: ScrollOffset) {
        if self.input.scroll_to(offset) {
            self.on_scroll();
        }
    }

    /// Scroll the input surface by a delta
    pub fn scroll_input_by(&mut self, top: f32, left: f32) {
        if self.input.scroll_by(top, left) {
            self.on_scroll();
        }
    }

    /// The host layout measured the input surface's content width
    pub fn set_client_width(&mut self, width: Option<f32>) {
        self.input.set_client_width(width);
        if self.is_attached() {
            self.update_highlight();
        }
    }

    /// Regenerate the highlight surface from the current value and rules
    pub fn refresh(&mut self) {
        self.update_highlight();
    }

    // =========================================================================
    // Sync
    // =========================================================================

    fn user_edit(&mut self, edit: impl FnOnce(&mut InputSurface) -> bool) -> bool {
        if !self.is_attached() {
            log::debug!("{} ignored an edit while detached", TAG_NAME);
            return false;
        }
        if !edit(&mut self.input) {
            return false;
        }
        self.input.reveal_caret();
        self.on_input();
        true
    }

    /// Native input event: regenerate, then notify observers
    fn on_input(&mut self) {
        self.update_highlight();
        let event = InputEvent::new(self.input.value());
        self.listeners.dispatch(&event);
    }

    /// Native scroll event: mirror verbatim
    fn on_scroll(&mut self) {
        self.highlight.mirror_scroll(self.input.scroll());
    }

    /// Reapply every observed attribute and the host metrics
    fn update_attributes(&mut self) {
        let attrs = &self.attributes;
        self.input.set_placeholder(attrs.placeholder());
        self.input.set_rows(attrs.rows());
        self.input.set_cols(attrs.cols());
        self.input.set_value(Some(attrs.value()));

        let metrics = derive_metrics(&self.host_style);
        self.input.set_style(metrics.clone());
        self.highlight.set_style(metrics);

        self.input.set_max_length(attrs.max_length());

        self.update_highlight();
    }

    fn update_highlight(&mut self) {
        let markup = render_markup(self.input.value(), self.attributes.highlight());
        self.highlight.set_markup(markup);
        self.highlight.mirror_scroll(self.input.scroll());
        self.highlight.set_size(BoxSize {
            width: self.input.client_width(),
            height: self.input.box_size().height,
        });
    }
}

impl Default for PrettyTextarea {
    fn default() -> Self {
        Self::new()
    }
}

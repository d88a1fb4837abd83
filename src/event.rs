//! Change notifications
//!
//! The component re-emits user edits as a single `input` event so outside
//! observers can treat it as one value-bearing control. Propagation through
//! the host's containment tree is the host's job; the event only says that
//! it bubbles.

/// Name of the emitted event
pub const INPUT_EVENT: &str = "input";

/// Notification emitted after a user-driven value change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// The value after the change
    pub value: String,
    /// Always true: the event propagates to ancestors
    pub bubbles: bool,
}

impl InputEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            bubbles: true,
        }
    }

    pub fn name(&self) -> &'static str {
        INPUT_EVENT
    }
}

/// Receiver of component events
pub trait EventSink {
    fn handle_event(&mut self, event: &InputEvent);
}

impl<F: FnMut(&InputEvent)> EventSink for F {
    fn handle_event(&mut self, event: &InputEvent) {
        self(event)
    }
}

/// Registered event sinks, called in registration order
#[derive(Default)]
pub struct Listeners {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver one event to every sink
    pub fn dispatch(&mut self, event: &InputEvent) {
        log::trace!("dispatch {} ({} listeners)", event.name(), self.sinks.len());
        for sink in &mut self.sinks {
            sink.handle_event(event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("len", &self.sinks.len()).finish()
    }
}

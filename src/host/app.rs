//! Terminal host state and main loop

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::error::Result;
use crate::event::InputEvent;
use crate::host::display::Display;
use crate::host::keys::{translate_key, Action};
use crate::host::terminal::{Terminal, TerminalEvent};
use crate::metrics::HostStyle;
use crate::textarea::PrettyTextarea;

/// Hosts one component in the terminal
pub struct App {
    terminal: Terminal,
    display: Display,
    textarea: PrettyTextarea,
    /// Host-local clipboard for cut/copy/paste
    clipboard: String,
    /// Last `input` event seen by the host's listener
    last_event: Rc<RefCell<Option<InputEvent>>>,
}

impl App {
    /// Attach `textarea` to the terminal
    pub fn new(terminal: Terminal, mut textarea: PrettyTextarea) -> Self {
        let last_event = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last_event);
        textarea.add_listener(move |event: &InputEvent| {
            *sink.borrow_mut() = Some(event.clone());
        });
        textarea.connected(HostStyle::terminal());

        let mut app = Self {
            terminal,
            display: Display::new(),
            textarea,
            clipboard: String::new(),
            last_event,
        };
        app.layout();
        app
    }

    /// Run until the user quits
    pub fn run(&mut self) -> Result<()> {
        self.display.force_redraw();

        loop {
            if let Some(event) = self.last_event.borrow_mut().take() {
                self.display
                    .set_message(format!("input: {} chars", event.value.chars().count()));
            }
            self.display.render(&mut self.terminal, &self.textarea)?;

            let keep_running = match self.terminal.read_event()? {
                TerminalEvent::Key(key) => match translate_key(key) {
                    Some(action) => apply_action(&mut self.textarea, &mut self.clipboard, action),
                    None => true,
                },
                TerminalEvent::Paste(text) => {
                    self.textarea.paste(&text);
                    true
                }
                TerminalEvent::Mouse(mouse) => {
                    self.handle_mouse(mouse);
                    true
                }
                TerminalEvent::Resize(_, _) => {
                    self.layout();
                    self.display.force_redraw();
                    true
                }
            };
            if !keep_running {
                break;
            }
        }

        Ok(())
    }

    /// Leave the terminal and hand back the final value
    pub fn into_value(self) -> String {
        let value = self.textarea.value().to_string();
        drop(self.terminal);
        value
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.textarea.scroll_input_by(-1.0, 0.0),
            MouseEventKind::ScrollDown => self.textarea.scroll_input_by(1.0, 0.0),
            MouseEventKind::ScrollLeft => self.textarea.scroll_input_by(0.0, -1.0),
            MouseEventKind::ScrollRight => self.textarea.scroll_input_by(0.0, 1.0),
            _ => {}
        }
    }

    /// Report the visible width of the text box to the component
    fn layout(&mut self) {
        let cols = self.textarea.input().cols().min(self.terminal.cols() as u32);
        self.textarea.set_client_width(Some(cols as f32));
    }
}

/// Apply one key action; returns false when the host should exit
pub fn apply_action(textarea: &mut PrettyTextarea, clipboard: &mut String, action: Action) -> bool {
    match action {
        Action::Insert(text) => {
            textarea.type_text(&text);
        }
        Action::Newline => {
            textarea.type_newline();
        }
        Action::Backspace => {
            textarea.delete_backward();
        }
        Action::Delete => {
            textarea.delete_forward();
        }
        Action::Move(motion, extend) => textarea.move_caret(motion, extend),
        Action::ScrollRows(pages) => {
            let page = textarea.input().rows() as f32 * textarea.input().style().line_height;
            textarea.scroll_input_by(pages as f32 * page, 0.0);
        }
        Action::SelectAll => textarea.select_all(),
        Action::Cut => {
            if let Some(text) = textarea.cut() {
                *clipboard = text;
            }
        }
        Action::Copy => {
            if let Some(text) = textarea.input().selected_text() {
                *clipboard = text.to_string();
            }
        }
        Action::Paste => {
            if !clipboard.is_empty() {
                textarea.paste(clipboard);
            }
        }
        Action::Quit => return false,
    }
    true
}

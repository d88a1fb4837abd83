//! Key translation for the terminal host

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::surface::CaretMotion;

/// What a key press asks the component to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert typed text
    Insert(String),
    Newline,
    Backspace,
    Delete,
    /// Move the caret; `true` extends the selection
    Move(CaretMotion, bool),
    /// Scroll by a number of rows
    ScrollRows(i32),
    SelectAll,
    Cut,
    Copy,
    Paste,
    Quit,
}

/// Translate a crossterm KeyEvent to an action
pub fn translate_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, kind, ..
    } = event;

    // Only process key press events, ignore release and repeat
    // This is critical on Windows where crossterm sends all event types
    if kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);

    let action = match code {
        KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
            'q' => Action::Quit,
            'a' => Action::SelectAll,
            'x' => Action::Cut,
            'c' => Action::Copy,
            'v' => Action::Paste,
            _ => return None,
        },
        KeyCode::Char(ch) => Action::Insert(ch.to_string()),
        KeyCode::Enter => Action::Newline,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::Move(CaretMotion::Left, shift),
        KeyCode::Right => Action::Move(CaretMotion::Right, shift),
        KeyCode::Up => Action::Move(CaretMotion::Up, shift),
        KeyCode::Down => Action::Move(CaretMotion::Down, shift),
        KeyCode::Home if ctrl => Action::Move(CaretMotion::TextStart, shift),
        KeyCode::End if ctrl => Action::Move(CaretMotion::TextEnd, shift),
        KeyCode::Home => Action::Move(CaretMotion::LineStart, shift),
        KeyCode::End => Action::Move(CaretMotion::LineEnd, shift),
        KeyCode::PageUp => Action::ScrollRows(-1),
        KeyCode::PageDown => Action::ScrollRows(1),
        KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            translate_key(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::Insert("a".to_string()))
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Insert("A".to_string()))
        );
        assert_eq!(
            translate_key(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Newline)
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            translate_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(Action::Cut)
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_motion_keys() {
        assert_eq!(
            translate_key(press(KeyCode::Left, KeyModifiers::SHIFT)),
            Some(Action::Move(CaretMotion::Left, true))
        );
        assert_eq!(
            translate_key(press(KeyCode::End, KeyModifiers::CONTROL)),
            Some(Action::Move(CaretMotion::TextEnd, false))
        );
        assert_eq!(
            translate_key(press(KeyCode::Home, KeyModifiers::NONE)),
            Some(Action::Move(CaretMotion::LineStart, false))
        );
    }

    #[test]
    fn test_release_ignored() {
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(translate_key(event), None);
    }
}

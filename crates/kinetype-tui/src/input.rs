use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    JumpToTop,
    JumpToBottom,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,

        (KeyCode::Char('d'), KeyModifiers::NONE | KeyModifiers::CONTROL) => Action::HalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::NONE | KeyModifiers::CONTROL) => Action::HalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::NONE | KeyModifiers::CONTROL) => Action::PageDown,
        (KeyCode::Char('b'), KeyModifiers::NONE | KeyModifiers::CONTROL) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::PageDown,

        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) => Action::JumpToBottom,
        (KeyCode::End, _) => Action::JumpToBottom,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE)), Action::ScrollDown);
        assert_eq!(handle_key_event(key(KeyCode::Up, KeyModifiers::NONE)), Action::ScrollUp);
        assert_eq!(handle_key_event(key(KeyCode::Char('d'), KeyModifiers::CONTROL)), Action::HalfPageDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('b'), KeyModifiers::NONE)), Action::PageUp);
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('g'), KeyModifiers::NONE)), Action::JumpToTop);
        // Terminals report shifted letters both with and without SHIFT
        assert_eq!(handle_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT)), Action::JumpToBottom);
        assert_eq!(handle_key_event(key(KeyCode::Char('G'), KeyModifiers::NONE)), Action::JumpToBottom);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }
}

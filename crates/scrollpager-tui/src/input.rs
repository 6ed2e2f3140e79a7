use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Move focus to the next button
    FocusNext,
    /// Move focus to the previous button
    FocusPrev,
    /// Activate the focused button
    Activate,
    /// Cycle the container's writing mode / direction
    CycleStyle,
    /// Toggle scroll snapping on the container
    ToggleSnap,
    None,
}

/// Enter and Space activate a button, like a native button element
pub fn is_activation_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers == KeyModifiers::NONE
        && matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if is_activation_key(&key) {
        return Action::Activate;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => Action::FocusPrev,
        (KeyCode::Char('w'), KeyModifiers::NONE) => Action::CycleStyle,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::ToggleSnap,
        _ => Action::None,
    }
}

//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,

    // Friends list
    NextFriend,
    PrevFriend,
    ToggleSelect,

    // Add-friend form
    ToggleAddFriendForm,
    AddFriendChar(char),
    AddFriendBackspace,
    NextAddFriendField,
    SubmitAddFriend,
    CancelAddFriend,

    // Split form
    StartEditing,
    StopEditing,
    SplitChar(char),
    SplitBackspace,
    NextSplitField,
    PrevSplitField,
    CyclePayer,
    SubmitSplit,
    CancelSplit,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Friends,
    Split,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Field focused in the add-friend form
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    pub fn next(&self) -> AddFriendField {
        match self {
            AddFriendField::Name => AddFriendField::Image,
            AddFriendField::Image => AddFriendField::Name,
        }
    }
}

/// Field focused in the split-bill form
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum SplitField {
    #[default]
    Bill,
    UserPaid,
    Payer,
}

impl SplitField {
    pub fn next(&self) -> SplitField {
        match self {
            SplitField::Bill => SplitField::UserPaid,
            SplitField::UserPaid => SplitField::Payer,
            SplitField::Payer => SplitField::Bill,
        }
    }

    pub fn prev(&self) -> SplitField {
        match self {
            SplitField::Bill => SplitField::Payer,
            SplitField::UserPaid => SplitField::Bill,
            SplitField::Payer => SplitField::UserPaid,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
    show_add_friend: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Popups capture all keys while open
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_add_friend {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelAddFriend),
            KeyCode::Enter => Some(UiEvent::SubmitAddFriend),
            KeyCode::Tab => Some(UiEvent::NextAddFriendField),
            KeyCode::Backspace => Some(UiEvent::AddFriendBackspace),
            KeyCode::Char(c) => Some(UiEvent::AddFriendChar(c)),
            _ => None,
        };
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('a') => Some(UiEvent::ToggleAddFriendForm),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Up => match active_panel {
                Panel::Friends => Some(UiEvent::PrevFriend),
                Panel::Split => Some(UiEvent::PrevSplitField),
            },
            KeyCode::Down => match active_panel {
                Panel::Friends => Some(UiEvent::NextFriend),
                Panel::Split => Some(UiEvent::NextSplitField),
            },
            KeyCode::Enter | KeyCode::Char(' ') if active_panel == Panel::Friends => {
                Some(UiEvent::ToggleSelect)
            }
            KeyCode::Char('e') | KeyCode::Enter if active_panel == Panel::Split => {
                Some(UiEvent::StartEditing)
            }
            KeyCode::Char('p') if active_panel == Panel::Split => Some(UiEvent::CyclePayer),
            KeyCode::Char('s') if active_panel == Panel::Split => Some(UiEvent::SubmitSplit),
            KeyCode::Esc if active_panel == Panel::Split => Some(UiEvent::CancelSplit),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextSplitField),
            KeyCode::Backspace => Some(UiEvent::SplitBackspace),
            KeyCode::Char(c) => Some(UiEvent::SplitChar(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_from_normal_mode() {
        let event = key_to_ui_event(
            press(KeyCode::Char('q')),
            Panel::Friends,
            InputMode::Normal,
            false,
            false,
        );
        assert_eq!(event, Some(UiEvent::Quit));
    }

    #[test]
    fn test_enter_toggles_selection_on_friends_panel() {
        let event = key_to_ui_event(
            press(KeyCode::Enter),
            Panel::Friends,
            InputMode::Normal,
            false,
            false,
        );
        assert_eq!(event, Some(UiEvent::ToggleSelect));
    }

    #[test]
    fn test_add_friend_popup_captures_chars() {
        let event = key_to_ui_event(
            press(KeyCode::Char('q')),
            Panel::Friends,
            InputMode::Normal,
            false,
            true,
        );
        assert_eq!(event, Some(UiEvent::AddFriendChar('q')));
    }

    #[test]
    fn test_editing_routes_chars_to_split_form() {
        let event = key_to_ui_event(
            press(KeyCode::Char('5')),
            Panel::Split,
            InputMode::Editing,
            false,
            false,
        );
        assert_eq!(event, Some(UiEvent::SplitChar('5')));
    }
}

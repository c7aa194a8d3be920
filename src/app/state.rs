//! App state - pure data structure with no I/O logic

use uuid::Uuid;

use crate::messages::ui_events::{AddFriendField, InputMode, Panel, SplitField};
use crate::messages::RenderState;
use crate::models::{seed_friends, AddFriendDraft, Friend, SplitDraft};

/// Main application state - pure data, no I/O
pub struct AppState {
    // Friend registry (insertion order is display order)
    pub friends: Vec<Friend>,

    // Selection (by identifier, never by value)
    pub selected: Option<Uuid>,
    pub highlighted: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,

    // Add-friend form
    pub show_add_friend: bool,
    pub add_friend: AddFriendDraft,
    pub add_friend_field: AddFriendField,

    // Split form (exists only while a friend is selected)
    pub split: SplitDraft,
    pub split_field: SplitField,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            friends: seed_friends(),
            selected: None,
            highlighted: 0,
            active_panel: Panel::Friends,
            input_mode: InputMode::Normal,
            show_add_friend: false,
            add_friend: AddFriendDraft::default(),
            add_friend_field: AddFriendField::Name,
            split: SplitDraft::default(),
            split_field: SplitField::Bill,
            show_help: false,
        }
    }

    /// Resolve the current selection against the registry
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected
            .and_then(|id| self.friends.iter().find(|f| f.id == id))
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            friends: self.friends.clone(),
            selected_friend: self.selected,
            highlighted: self.highlighted,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            show_add_friend: self.show_add_friend,
            add_friend: self.add_friend.clone(),
            add_friend_field: self.add_friend_field,
            split: self.split.clone(),
            split_field: self.split_field,
            show_help: self.show_help,
        }
    }
}

//! Render state - data structure sent from App layer to UI for rendering

use uuid::Uuid;

use crate::messages::ui_events::{AddFriendField, InputMode, Panel, SplitField};
use crate::models::{AddFriendDraft, Friend, SplitDraft};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Friend registry
    pub friends: Vec<Friend>,
    pub selected_friend: Option<Uuid>,
    pub highlighted: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,

    // Add-friend form
    pub show_add_friend: bool,
    pub add_friend: AddFriendDraft,
    pub add_friend_field: AddFriendField,

    // Split form
    pub split: SplitDraft,
    pub split_field: SplitField,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// The friend record the split form is for, if any
    pub fn selected_friend_record(&self) -> Option<&Friend> {
        self.selected_friend
            .and_then(|id| self.friends.iter().find(|f| f.id == id))
    }
}

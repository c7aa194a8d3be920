//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{AddFriendField, InputMode, Panel, SplitField};
use crate::models::{AddFriendDraft, Friend, Payer, SplitDraft};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        // The split panel only exists while a friend is selected
        if self.selected.is_some() {
            self.active_panel = match self.active_panel {
                Panel::Friends => Panel::Split,
                Panel::Split => Panel::Friends,
            };
        }
    }

    pub fn prev_panel(&mut self) {
        self.next_panel();
    }

    pub fn next_friend(&mut self) {
        if !self.friends.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.friends.len();
        }
    }

    pub fn prev_friend(&mut self) {
        if !self.friends.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.friends.len() - 1);
        }
    }

    // ========================
    // Selection
    // ========================

    /// XOR-toggle on the highlighted friend: selecting the already selected
    /// friend again clears the selection. Comparison is by identifier, so
    /// two friends with identical fields never shadow each other.
    pub fn toggle_select(&mut self) {
        let Some(friend) = self.friends.get(self.highlighted) else {
            return;
        };
        let id = friend.id;

        if self.selected == Some(id) {
            self.clear_selection();
        } else {
            self.selected = Some(id);
            self.split = SplitDraft::default();
            self.split_field = SplitField::Bill;
            self.show_add_friend = false;
            self.add_friend = AddFriendDraft::default();
        }
    }

    /// Drop the selection and the split draft that belongs to it
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.split = SplitDraft::default();
        self.split_field = SplitField::Bill;
        self.active_panel = Panel::Friends;
        self.input_mode = InputMode::Normal;
    }

    // ========================
    // Add-friend form
    // ========================

    pub fn toggle_add_friend_form(&mut self) {
        self.show_add_friend = !self.show_add_friend;
        if !self.show_add_friend {
            self.add_friend = AddFriendDraft::default();
        }
        self.add_friend_field = AddFriendField::Name;
    }

    pub fn add_friend_char(&mut self, c: char) {
        match self.add_friend_field {
            AddFriendField::Name => self.add_friend.name.push(c),
            AddFriendField::Image => self.add_friend.image.push(c),
        }
    }

    pub fn add_friend_backspace(&mut self) {
        match self.add_friend_field {
            AddFriendField::Name => self.add_friend.name.pop(),
            AddFriendField::Image => self.add_friend.image.pop(),
        };
    }

    pub fn next_add_friend_field(&mut self) {
        self.add_friend_field = self.add_friend_field.next();
    }

    /// Commit the add-friend form. An empty name or image is a silent no-op;
    /// on success the new friend lands at the end of the list with a settled
    /// balance, the draft resets, and the form closes.
    pub fn submit_add_friend(&mut self) {
        if !self.add_friend.is_complete() {
            return;
        }

        let friend = Friend::new(self.add_friend.name.clone(), &self.add_friend.image);
        tracing::debug!(name = %friend.name, id = %friend.id, "friend added");
        self.friends.push(friend);

        self.add_friend = AddFriendDraft::default();
        self.add_friend_field = AddFriendField::Name;
        self.show_add_friend = false;
    }

    pub fn cancel_add_friend(&mut self) {
        self.show_add_friend = false;
        self.add_friend = AddFriendDraft::default();
        self.add_friend_field = AddFriendField::Name;
    }

    // ========================
    // Split form
    // ========================

    pub fn start_editing(&mut self) {
        if self.selected.is_none() {
            return;
        }
        if self.split_field == SplitField::Payer {
            // The payer field has no text to edit
            self.cycle_payer();
            return;
        }
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_split_field(&mut self) {
        self.split_field = self.split_field.next();
        if self.split_field == SplitField::Payer {
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn prev_split_field(&mut self) {
        self.split_field = self.split_field.prev();
    }

    /// Append a character to the focused amount buffer. Only numeric input
    /// is accepted, and the user share is re-clamped after every edit of
    /// either field so it can never exceed the bill.
    pub fn split_char(&mut self, c: char) {
        if !c.is_ascii_digit() && c != '.' {
            return;
        }
        match self.split_field {
            SplitField::Bill => self.split.bill.push(c),
            SplitField::UserPaid => self.split.user_paid.push(c),
            SplitField::Payer => return,
        }
        self.split.clamp_user_share();
    }

    pub fn split_backspace(&mut self) {
        match self.split_field {
            SplitField::Bill => self.split.bill.pop(),
            SplitField::UserPaid => self.split.user_paid.pop(),
            SplitField::Payer => None,
        };
        self.split.clamp_user_share();
    }

    pub fn cycle_payer(&mut self) {
        self.split.payer = self.split.payer.toggle();
    }

    /// Commit the split. Requires a selection and parseable amounts,
    /// otherwise the form simply does not advance. The delta is signed by
    /// who fronts the money: +amount when the user pays, -amount when the
    /// friend does. Only the selected friend's balance changes, and a
    /// successful commit clears the selection.
    pub fn submit_split(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        let Some(amount) = self.split.amount() else {
            return;
        };

        let delta = match self.split.payer {
            Payer::User => amount,
            Payer::Friend => -amount,
        };

        if let Some(friend) = self.friends.iter_mut().find(|f| f.id == id) {
            friend.balance += delta;
            tracing::debug!(name = %friend.name, delta, balance = friend.balance, "split committed");
        }

        self.clear_selection();
    }

    pub fn cancel_split(&mut self) {
        self.clear_selection();
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // AppState::new seeds Clark (-7), Sarah (+20), Anthony (0)

    fn select_nth(state: &mut AppState, index: usize) {
        state.highlighted = index;
        state.toggle_select();
    }

    fn type_into(state: &mut AppState, field: SplitField, text: &str) {
        state.split_field = field;
        for c in text.chars() {
            state.split_char(c);
        }
    }

    #[test]
    fn test_add_friend_appends_with_zero_balance() {
        let mut state = AppState::new();
        state.toggle_add_friend_form();
        for c in "Mia".chars() {
            state.add_friend_char(c);
        }
        state.submit_add_friend();

        assert_eq!(state.friends.len(), 4);
        let mia = &state.friends[3];
        assert_eq!(mia.name, "Mia");
        assert_eq!(mia.balance, 0.0);
        assert!(!state.show_add_friend);
        assert_eq!(state.add_friend, AddFriendDraft::default());
    }

    #[test]
    fn test_add_friend_ids_are_unique() {
        let mut state = AppState::new();
        for name in ["Mia", "Noah", "Ada"] {
            state.toggle_add_friend_form();
            for c in name.chars() {
                state.add_friend_char(c);
            }
            state.submit_add_friend();
        }

        assert_eq!(state.friends.len(), 6);
        for (i, a) in state.friends.iter().enumerate() {
            for b in &state.friends[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_add_friend_empty_name_rejected() {
        let mut state = AppState::new();
        let before = state.friends.clone();
        state.toggle_add_friend_form();
        state.submit_add_friend();

        assert_eq!(state.friends, before);
        assert!(state.show_add_friend);
    }

    #[test]
    fn test_add_friend_empty_image_rejected() {
        let mut state = AppState::new();
        let before = state.friends.clone();
        state.toggle_add_friend_form();
        for c in "Mia".chars() {
            state.add_friend_char(c);
        }
        state.next_add_friend_field();
        state.add_friend.image.clear();
        state.submit_add_friend();

        assert_eq!(state.friends, before);
    }

    #[test]
    fn test_add_friend_avatar_uris_stay_unique() {
        let mut state = AppState::new();
        for name in ["Mia", "Noah"] {
            state.toggle_add_friend_form();
            for c in name.chars() {
                state.add_friend_char(c);
            }
            state.submit_add_friend();
        }

        let mia = &state.friends[3];
        let noah = &state.friends[4];
        // Same placeholder base, distinct final URIs carrying each id
        assert_ne!(mia.image, noah.image);
        assert!(mia.image.contains(&mia.id.to_string()));
        assert!(noah.image.contains(&noah.id.to_string()));
    }

    #[test]
    fn test_toggle_select_twice_clears() {
        let mut state = AppState::new();
        let sarah = state.friends[1].id;

        select_nth(&mut state, 1);
        assert_eq!(state.selected, Some(sarah));

        state.toggle_select();
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_selecting_another_friend_moves_selection() {
        let mut state = AppState::new();
        select_nth(&mut state, 0);
        let clark = state.friends[0].id;
        assert_eq!(state.selected, Some(clark));

        select_nth(&mut state, 2);
        assert_eq!(state.selected, Some(state.friends[2].id));
    }

    #[test]
    fn test_selecting_closes_add_friend_form() {
        let mut state = AppState::new();
        state.toggle_add_friend_form();
        select_nth(&mut state, 0);
        assert!(!state.show_add_friend);
    }

    #[test]
    fn test_split_user_pays_increases_balance() {
        let mut state = AppState::new();
        select_nth(&mut state, 0); // Clark, balance -7

        type_into(&mut state, SplitField::Bill, "20");
        type_into(&mut state, SplitField::UserPaid, "10");
        state.split.payer = Payer::User;
        state.submit_split();

        assert_eq!(state.friends[0].balance, 3.0); // -7 + 10
        assert_eq!(state.friends[1].balance, 20.0);
        assert_eq!(state.friends[2].balance, 0.0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_split_friend_pays_decreases_balance() {
        let mut state = AppState::new();
        select_nth(&mut state, 1); // Sarah, balance 20

        type_into(&mut state, SplitField::Bill, "30");
        type_into(&mut state, SplitField::UserPaid, "10");
        state.split.payer = Payer::Friend;
        state.submit_split();

        // Friend share is 30 - 10 = 20, friend fronted it
        assert_eq!(state.friends[1].balance, 0.0);
        assert_eq!(state.friends[0].balance, -7.0);
        assert_eq!(state.friends[2].balance, 0.0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_split_without_bill_is_a_no_op() {
        let mut state = AppState::new();
        select_nth(&mut state, 0);

        type_into(&mut state, SplitField::UserPaid, "10");
        state.submit_split();

        assert_eq!(state.friends[0].balance, -7.0);
        assert!(state.selected.is_some());
    }

    #[test]
    fn test_split_without_selection_is_a_no_op() {
        let mut state = AppState::new();
        let before = state.friends.clone();
        type_into(&mut state, SplitField::Bill, "20");
        type_into(&mut state, SplitField::UserPaid, "10");
        state.submit_split();
        assert_eq!(state.friends, before);
    }

    #[test]
    fn test_user_share_clamped_while_typing() {
        let mut state = AppState::new();
        select_nth(&mut state, 0);

        type_into(&mut state, SplitField::Bill, "50");
        type_into(&mut state, SplitField::UserPaid, "75");

        assert_eq!(state.split.user_paid, "50");
        assert_eq!(state.split.friend_share(), Some(0.0));
    }

    #[test]
    fn test_user_share_reclamped_when_bill_shrinks() {
        let mut state = AppState::new();
        select_nth(&mut state, 0);

        type_into(&mut state, SplitField::Bill, "50");
        type_into(&mut state, SplitField::UserPaid, "40");

        // Deleting a digit from the bill drops it to 5
        state.split_field = SplitField::Bill;
        state.split_backspace();

        assert_eq!(state.split.bill, "5");
        assert_eq!(state.split.user_paid, "5");
    }

    #[test]
    fn test_even_split_with_zero_friend_share() {
        let mut state = AppState::new();
        select_nth(&mut state, 2); // Anthony, balance 0

        type_into(&mut state, SplitField::Bill, "50");
        type_into(&mut state, SplitField::UserPaid, "50");
        state.split.payer = Payer::Friend;
        state.submit_split();

        // Friend fronted an amount of 0, so nothing changes
        assert_eq!(state.friends[2].balance, 0.0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_deselection_discards_split_draft() {
        let mut state = AppState::new();
        select_nth(&mut state, 0);
        type_into(&mut state, SplitField::Bill, "50");

        state.highlighted = 0;
        state.toggle_select(); // toggle-off

        assert_eq!(state.split, SplitDraft::default());
    }

    #[test]
    fn test_non_numeric_split_input_ignored() {
        let mut state = AppState::new();
        select_nth(&mut state, 0);

        state.split_field = SplitField::Bill;
        state.split_char('x');
        state.split_char('5');
        assert_eq!(state.split.bill, "5");
    }

    #[test]
    fn test_split_panel_unreachable_without_selection() {
        let mut state = AppState::new();
        state.next_panel();
        assert_eq!(state.active_panel, Panel::Friends);

        select_nth(&mut state, 0);
        state.next_panel();
        assert_eq!(state.active_panel, Panel::Split);
    }
}

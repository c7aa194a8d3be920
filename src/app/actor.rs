//! App actor - message loop processing UI events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};

/// App actor that owns the state and processes UI events one at a time
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state: AppState::new(),
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                // Quit signal received
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Panel navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),

            // Friends list
            UiEvent::NextFriend => self.state.next_friend(),
            UiEvent::PrevFriend => self.state.prev_friend(),
            UiEvent::ToggleSelect => self.state.toggle_select(),

            // Add-friend form
            UiEvent::ToggleAddFriendForm => self.state.toggle_add_friend_form(),
            UiEvent::AddFriendChar(c) => self.state.add_friend_char(c),
            UiEvent::AddFriendBackspace => self.state.add_friend_backspace(),
            UiEvent::NextAddFriendField => self.state.next_add_friend_field(),
            UiEvent::SubmitAddFriend => self.state.submit_add_friend(),
            UiEvent::CancelAddFriend => self.state.cancel_add_friend(),

            // Split form
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::SplitChar(c) => self.state.split_char(c),
            UiEvent::SplitBackspace => self.state.split_backspace(),
            UiEvent::NextSplitField => self.state.next_split_field(),
            UiEvent::PrevSplitField => self.state.prev_split_field(),
            UiEvent::CyclePayer => self.state.cycle_payer(),
            UiEvent::SubmitSplit => self.state.submit_split(),
            UiEvent::CancelSplit => self.state.cancel_split(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

//! # Tally TUI
//!
//! A minimal terminal-based expense splitting tool: track a list of friends,
//! split a bill with one of them, and keep a running balance of who owes whom.
//!
//! ## Features
//! - Friend list with per-friend running balances
//! - Add-friend form with placeholder avatars
//! - Split-bill form with a derived friend share and payer selection
//! - Balance updates signed by who fronted the money
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine, Tokio task)

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use messages::{RenderState, UiEvent};
pub use models::{AddFriendDraft, Friend, Payer, SplitDraft};

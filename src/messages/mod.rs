//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI and App layers.

pub mod render;
pub mod ui_events;

pub use render::RenderState;
pub use ui_events::UiEvent;

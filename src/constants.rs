//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Placeholder avatar base URI for newly added friends
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// Log file name (the terminal itself is taken over by the UI)
pub const LOG_FILE: &str = "tally.log";

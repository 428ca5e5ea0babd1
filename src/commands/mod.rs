//! Command routing module.
//!
//! Maps inbound transport events (slash commands, membership changes,
//! keyboard button presses) to session mutations and localized replies.

mod handler;
mod types;

pub use handler::{
    BotState, SharedSessions, handle_command, handle_message, handle_new_members, schema,
};
pub use types::Command;

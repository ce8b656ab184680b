//! Chat turn processing for linexplain.
//!
//! `ChatService` serves stored history and runs a turn: append the user
//! message, reload history, prepend the system prompt, call the provider,
//! append the reply.

pub mod prompt;
pub mod service;

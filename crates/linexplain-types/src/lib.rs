//! Shared domain types for linexplain.
//!
//! Chat messages, session identifiers, LLM request/response shapes, and the
//! error enums shared by the core and infrastructure layers.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod error;
pub mod llm;

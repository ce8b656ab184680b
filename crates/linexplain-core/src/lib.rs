//! Business logic and port definitions for linexplain.
//!
//! This crate defines the traits (history repository, LLM provider) that the
//! infrastructure layer implements, plus the chat turn processor built on
//! them. It depends only on `linexplain-types` and `linexplain-observe` --
//! never on `linexplain-infra` or any database/IO crate.

pub mod chat;
pub mod llm;
pub mod repository;

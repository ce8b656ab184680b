//! Cloudflare Workers AI provider implementation.
//!
//! This module provides the [`WorkersAiProvider`] which implements the
//! [`LlmProvider`](linexplain_core::llm::provider::LlmProvider) trait for the
//! Workers AI REST endpoint (non-streaming text generation).

pub mod client;
pub mod types;

pub use client::WorkersAiProvider;

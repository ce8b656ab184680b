//! OpenTelemetry GenAI Semantic Convention attribute values.
//!
//! Span fields follow the `gen_ai.*` naming of the OTel GenAI conventions.
//! Field names must be literal in `tracing` macros, so this module only
//! carries the values recorded into them.
//!
//! Span naming convention: `"gen_ai.{operation}"` (e.g., `"gen_ai.complete"`).

// --- Operation name values ---

/// Standard chat completion operation.
pub const OP_CHAT: &str = "chat";

// --- Provider name values ---

/// Cloudflare Workers AI provider identifier.
pub const PROVIDER_WORKERS_AI: &str = "workers_ai";

/// Generic OpenAI-compatible endpoint identifier.
pub const PROVIDER_OPENAI_COMPATIBLE: &str = "openai_compatible";

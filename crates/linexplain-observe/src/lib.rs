//! Observability setup for linexplain: tracing subscriber initialization
//! and OpenTelemetry GenAI attribute names.

pub mod genai_attrs;
pub mod tracing_setup;

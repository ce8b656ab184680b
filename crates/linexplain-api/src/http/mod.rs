//! HTTP layer for linexplain.
//!
//! Axum router with two JSON endpoints under `/api/` and static file serving
//! for everything else.

pub mod error;
pub mod handlers;
pub mod router;

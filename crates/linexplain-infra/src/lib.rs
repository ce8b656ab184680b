//! Infrastructure layer for linexplain.
//!
//! Contains implementations of the traits defined in `linexplain-core`:
//! SQLite history storage and the hosted inference providers.

pub mod llm;
pub mod sqlite;

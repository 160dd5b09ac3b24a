//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — resolved directory, query tables, log scan and verify reports.
//! - `constants.rs` — fixed file names, environment variables, log keywords.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or database side effects.
//!
//! ## Compatibility note
//! These structs are serialized verbatim by `--json`; keep field renames explicit.

pub mod constants;
pub mod models;

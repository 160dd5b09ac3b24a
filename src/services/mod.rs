//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — directory sources snapshot, precedence, canonicalization.
//! - `store.rs` — database existence check and the two read-only queries.
//! - `logscan.rs` — best-effort keyword tail of the commit log.
//! - `verify.rs` — fingerprint row counts against live table counts.
//! - `output.rs` — JSON/text output helpers and column rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Never read process environment below `config::DirectorySources::from_env`.

pub mod config;
pub mod logscan;
pub mod output;
pub mod store;
pub mod verify;

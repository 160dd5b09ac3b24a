//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `inspect.rs` — resolve directory, check database, run queries, scan log.
//!
//! ## Principles
//! - Steps run strictly in order; the first fatal error stops the run.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod inspect;

pub use inspect::{handle_inspect, inspect};

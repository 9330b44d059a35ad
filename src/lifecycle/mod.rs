//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! startup.rs:
//!     Load config → Validate → Build client → Transfer → Signature
//! ```
//!
//! # Design Decisions
//! - Fail fast: the first error ends the run
//! - Steps run in order, never concurrently
//! - Exit codes are decided by `main`, not here

pub mod startup;

pub use startup::{execute_transfer, run};

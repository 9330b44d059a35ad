//! Observability subsystem.
//!
//! Only structured logging through `tracing`; each step of a transfer emits
//! events with the public keys, amounts and signature involved.

pub mod logging;

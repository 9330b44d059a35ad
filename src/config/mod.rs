//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config.toml
//!     → loader.rs (read & deserialize)
//!     → request.rs (decode keys, address, endpoint)
//!     → validation.rs (semantic checks)
//!     → TransferRequest (immutable for the run)
//! ```

pub mod loader;
pub mod request;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_request, ConfigError};
pub use request::TransferRequest;
pub use schema::{TransferConfig, TransferFileConfig};
pub use validation::{validate_request, ValidationError};

/// Config file read from the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

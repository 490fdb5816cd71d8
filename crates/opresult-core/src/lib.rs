//! Opresult Core - uniform outcome envelope for application operations
//!
//! This crate provides [`OperationResult`], a value object through which any
//! operation reports whether it succeeded, along with titles, messages,
//! warnings, errors, an opaque payload and pagination metadata.
//!
//! # Main Components
//!
//! - **Result Envelope**: [`OperationResult`] with its derived success flag
//! - **Message Collections**: ordered positional and keyed entries
//! - **Configuration**: [`ResultConfig`] for construction from named fields
//! - **Export**: [`ResultExport`], the fixed-order structured representation
//! - **Error Handling**: lookup failures using `thiserror`
//!
//! # Example
//!
//! ```
//! use opresult_core::{OperationResult, Result};
//!
//! fn example() -> Result<()> {
//!     let mut result = OperationResult::new();
//!     result
//!         .set_command("users.import")
//!         .add_message("Imported 2 users")
//!         .add_error_with_key("row 3", vec!["Missing email", "Invalid role"]);
//!
//!     assert!(!result.is_success());
//!     assert_eq!(result.last_error()?.key(), Some("row 3"));
//!     assert_eq!(result.errors_string(true), "[row 3]\nMissing email\nInvalid role");
//!
//!     let exported = result.to_value()?;
//!     assert_eq!(exported["command"], "users.import");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod messages;
pub mod result;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use config::ResultConfig;
pub use error::{Error, Result};
pub use messages::{MessageEntry, MessageValue, Messages};
pub use result::{OperationResult, ResultExport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

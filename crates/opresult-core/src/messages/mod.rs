//! Message, warning and error collections
//!
//! A [`Messages`] collection keeps positional and keyed entries side by side
//! in insertion order. Entries are either plain strings or a key paired with a
//! single message or a list of sub-messages.
//!
//! # Examples
//!
//! ```
//! use opresult_core::messages::{MessageEntry, Messages};
//!
//! let mut errors = Messages::new();
//! errors.push("Connection refused");
//! errors.insert("email", "Email is required");
//! errors.insert("password", vec!["Too short", "Needs a digit"]);
//!
//! assert_eq!(errors.len(), 3);
//! assert_eq!(errors.get(0), Some(&MessageEntry::plain("Connection refused")));
//! assert_eq!(
//!     errors.render(true),
//!     "Connection refused\nEmail is required\n[password]\nToo short\nNeeds a digit"
//! );
//! ```

pub mod collection;
pub mod entry;


pub use collection::Messages;
pub use entry::{MessageEntry, MessageValue};

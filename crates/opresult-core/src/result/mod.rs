//! The operation result envelope
//!
//! [`OperationResult`] collects everything an operation wants to tell its
//! caller: a derived success flag, titles, messages, warnings and errors, an
//! opaque payload and pagination metadata.
//!
//! # Examples
//!
//! ```
//! use opresult_core::{OperationResult, ResultConfig};
//!
//! let mut result = OperationResult::from_config(ResultConfig {
//!     success_title: Some("Saved".to_string()),
//!     error_title: Some("Could not save".to_string()),
//!     ..Default::default()
//! });
//! assert!(result.is_success());
//! assert_eq!(result.title(), "Saved");
//!
//! result
//!     .add_error_with_key("email", "Email is required")
//!     .add_warning("Draft was autosaved");
//!
//! assert!(!result.is_success());
//! assert_eq!(result.title(), "Could not save");
//! assert_eq!(result.first_error().unwrap(), "Email is required");
//! ```

pub mod export;


pub use export::ResultExport;

use crate::config::ResultConfig;
use crate::error::{Error, Result};
use crate::messages::{MessageEntry, MessageValue, Messages};
use serde_json::{Map, Value};

/// Uniform outcome envelope for a single operation
///
/// `success` is derived from the error and warning collections each time
/// one of the message mutators runs. [`set_success`](Self::set_success)
/// overrides it until the next such mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    success: bool,
    title: String,
    success_title: String,
    warning_title: String,
    error_title: String,
    messages: Messages,
    warnings: Messages,
    errors: Messages,
    result: Value,
    data: Value,
    count: Option<u64>,
    total_records: Option<u64>,
    page: Option<u64>,
    total_pages: Option<u64>,
    limit: Option<u64>,
    offset: Option<u64>,
    command: String,
}

impl Default for OperationResult {
    fn default() -> Self {
        Self {
            success: true,
            title: String::new(),
            success_title: String::new(),
            warning_title: String::new(),
            error_title: String::new(),
            messages: Messages::new(),
            warnings: Messages::new(),
            errors: Messages::new(),
            result: Value::Null,
            data: Value::Object(Map::new()),
            count: None,
            total_records: None,
            page: None,
            total_pages: None,
            limit: None,
            offset: None,
            command: String::new(),
        }
    }
}

impl OperationResult {
    /// Create an empty, successful result
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a result from initial field values
    pub fn from_config(config: ResultConfig) -> Self {
        let mut result = Self::default();
        result.apply_config(config);
        result
    }

    /// Copy every field set in `config` onto this result, then recompute
    /// the success flag
    pub fn apply_config(&mut self, config: ResultConfig) -> &mut Self {
        let ResultConfig {
            success,
            title,
            success_title,
            warning_title,
            error_title,
            messages,
            warnings,
            errors,
            result,
            data,
            count,
            total_records,
            page,
            total_pages,
            limit,
            offset,
            command,
        } = config;

        if let Some(success) = success {
            self.success = success;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(success_title) = success_title {
            self.success_title = success_title;
        }
        if let Some(warning_title) = warning_title {
            self.warning_title = warning_title;
        }
        if let Some(error_title) = error_title {
            self.error_title = error_title;
        }
        if let Some(messages) = messages {
            self.messages = messages;
        }
        if let Some(warnings) = warnings {
            self.warnings = warnings;
        }
        if let Some(errors) = errors {
            self.errors = errors;
        }
        if let Some(result) = result {
            self.result = result;
        }
        if let Some(data) = data {
            self.data = data;
        }
        if count.is_some() {
            self.count = count;
        }
        if total_records.is_some() {
            self.total_records = total_records;
        }
        if page.is_some() {
            self.page = page;
        }
        if total_pages.is_some() {
            self.total_pages = total_pages;
        }
        if limit.is_some() {
            self.limit = limit;
        }
        if offset.is_some() {
            self.offset = offset;
        }
        if let Some(command) = command {
            self.command = command;
        }

        self.update_success()
    }

    // Append mutators

    /// Append a positional error
    pub fn add_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.add_error_entry(MessageEntry::Plain(message.into()))
    }

    /// Store an error under `key`, replacing any error with the same key
    pub fn add_error_with_key(
        &mut self,
        key: impl Into<String>,
        message: impl Into<MessageValue>,
    ) -> &mut Self {
        self.add_error_entry(MessageEntry::keyed(key, message))
    }

    pub fn add_error_entry(&mut self, entry: MessageEntry) -> &mut Self {
        log::trace!("Adding error entry: {:?}", entry);
        self.errors.push_entry(entry);
        self.update_success()
    }

    /// Append a positional warning
    pub fn add_warning(&mut self, message: impl Into<String>) -> &mut Self {
        self.add_warning_entry(MessageEntry::Plain(message.into()))
    }

    /// Store a warning under `key`, replacing any warning with the same key
    pub fn add_warning_with_key(
        &mut self,
        key: impl Into<String>,
        message: impl Into<MessageValue>,
    ) -> &mut Self {
        self.add_warning_entry(MessageEntry::keyed(key, message))
    }

    pub fn add_warning_entry(&mut self, entry: MessageEntry) -> &mut Self {
        log::trace!("Adding warning entry: {:?}", entry);
        self.warnings.push_entry(entry);
        self.update_success()
    }

    /// Append a positional message
    pub fn add_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.add_message_entry(MessageEntry::Plain(message.into()))
    }

    /// Store a message under `key`, replacing any message with the same key
    pub fn add_message_with_key(
        &mut self,
        key: impl Into<String>,
        message: impl Into<MessageValue>,
    ) -> &mut Self {
        self.add_message_entry(MessageEntry::keyed(key, message))
    }

    pub fn add_message_entry(&mut self, entry: MessageEntry) -> &mut Self {
        log::trace!("Adding message entry: {:?}", entry);
        self.messages.push_entry(entry);
        self.update_success()
    }

    // Bulk setters

    /// Replace all messages. A single message becomes a one-entry collection.
    pub fn set_messages(&mut self, messages: impl Into<Messages>) -> &mut Self {
        self.messages = messages.into();
        self.update_success()
    }

    /// Replace all warnings. A single warning becomes a one-entry collection.
    pub fn set_warnings(&mut self, warnings: impl Into<Messages>) -> &mut Self {
        self.warnings = warnings.into();
        self.update_success()
    }

    /// Replace all errors. A single error becomes a one-entry collection.
    pub fn set_errors(&mut self, errors: impl Into<Messages>) -> &mut Self {
        self.errors = errors.into();
        self.update_success()
    }

    // Success flag

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Override the success flag without looking at errors or warnings
    pub fn set_success(&mut self, success: bool) -> &mut Self {
        if success != self.derived_success() {
            log::debug!(
                "Success flag overridden to {} with {} error(s) and {} warning(s)",
                success,
                self.errors.len(),
                self.warnings.len()
            );
        }
        self.success = success;
        self
    }

    /// Recompute the success flag from errors and warnings
    pub fn update_success(&mut self) -> &mut Self {
        let success = self.derived_success();
        if success != self.success {
            log::debug!("Success flag changed from {} to {}", self.success, success);
        }
        self.success = success;
        self
    }

    fn derived_success(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    // Titles

    /// Resolve the title for the current state.
    ///
    /// An explicit title wins; otherwise the success, error or warning title
    /// is chosen in that order.
    pub fn title(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if self.is_success() {
            &self.success_title
        } else if !self.errors.is_empty() {
            &self.error_title
        } else if !self.warnings.is_empty() {
            &self.warning_title
        } else {
            &self.title
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn success_title(&self) -> &str {
        &self.success_title
    }

    pub fn set_success_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.success_title = title.into();
        self
    }

    pub fn warning_title(&self) -> &str {
        &self.warning_title
    }

    pub fn set_warning_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.warning_title = title.into();
        self
    }

    pub fn error_title(&self) -> &str {
        &self.error_title
    }

    pub fn set_error_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.error_title = title.into();
        self
    }

    // Collections

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn warnings(&self) -> &Messages {
        &self.warnings
    }

    pub fn errors(&self) -> &Messages {
        &self.errors
    }

    /// Error at an ordinal position in insertion order
    pub fn error_at(&self, position: usize) -> Result<&MessageEntry> {
        self.errors
            .get(position)
            .ok_or(Error::PositionNotFound { position })
    }

    pub fn first_error(&self) -> Result<&MessageEntry> {
        self.error_at(0)
    }

    pub fn last_error(&self) -> Result<&MessageEntry> {
        self.errors
            .last()
            .ok_or(Error::EmptyCollection { collection: "errors" })
    }

    /// Errors rendered one per line, list entries under an optional `[key]`
    pub fn errors_string(&self, with_key: bool) -> String {
        self.errors.render(with_key)
    }

    /// Warnings rendered one per line, list entries under an optional `[key]`
    pub fn warnings_string(&self, with_key: bool) -> String {
        self.warnings.render(with_key)
    }

    // Payload

    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn set_result(&mut self, result: impl Into<Value>) -> &mut Self {
        self.result = result.into();
        self
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn set_data(&mut self, data: impl Into<Value>) -> &mut Self {
        self.data = data.into();
        self
    }

    // Pagination

    pub fn count(&self) -> Option<u64> {
        self.count
    }

    pub fn set_count(&mut self, count: Option<u64>) -> &mut Self {
        self.count = count;
        self
    }

    pub fn total_records(&self) -> Option<u64> {
        self.total_records
    }

    pub fn set_total_records(&mut self, total_records: Option<u64>) -> &mut Self {
        self.total_records = total_records;
        self
    }

    pub fn page(&self) -> Option<u64> {
        self.page
    }

    pub fn set_page(&mut self, page: Option<u64>) -> &mut Self {
        self.page = page;
        self
    }

    pub fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    pub fn set_total_pages(&mut self, total_pages: Option<u64>) -> &mut Self {
        self.total_pages = total_pages;
        self
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<u64>) -> &mut Self {
        self.limit = limit;
        self
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Option<u64>) -> &mut Self {
        self.offset = offset;
        self
    }

    // Origin

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, command: impl Into<String>) -> &mut Self {
        self.command = command.into();
        self
    }
}

impl From<ResultConfig> for OperationResult {
    fn from(config: ResultConfig) -> Self {
        Self::from_config(config)
    }
}

//! Single entries of a message collection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value held by a keyed entry: one message or a list of sub-messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
    /// A single message
    Single(String),
    /// A group of sub-messages rendered under their key
    List(Vec<String>),
}

impl MessageValue {
    /// The message text, if this is a single message
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MessageValue::Single(message) => Some(message),
            MessageValue::List(_) => None,
        }
    }

    /// The sub-messages, if this is a list
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MessageValue::Single(_) => None,
            MessageValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for MessageValue {
    fn from(message: &str) -> Self {
        MessageValue::Single(message.to_string())
    }
}

impl From<String> for MessageValue {
    fn from(message: String) -> Self {
        MessageValue::Single(message)
    }
}

impl From<Vec<String>> for MessageValue {
    fn from(items: Vec<String>) -> Self {
        MessageValue::List(items)
    }
}

impl From<Vec<&str>> for MessageValue {
    fn from(items: Vec<&str>) -> Self {
        MessageValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// One item of a [`Messages`](super::Messages) collection
///
/// Positional entries carry only their text; keyed entries carry a label and
/// either a single message or a list of sub-messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEntry {
    /// Entry appended by position
    Plain(String),
    /// Entry stored under a key
    Keyed { key: String, value: MessageValue },
}

impl MessageEntry {
    /// Create a positional entry
    pub fn plain(message: impl Into<String>) -> Self {
        MessageEntry::Plain(message.into())
    }

    /// Create a keyed entry
    pub fn keyed(key: impl Into<String>, value: impl Into<MessageValue>) -> Self {
        MessageEntry::Keyed {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The key of a keyed entry
    pub fn key(&self) -> Option<&str> {
        match self {
            MessageEntry::Plain(_) => None,
            MessageEntry::Keyed { key, .. } => Some(key),
        }
    }

    /// The message text of a positional entry or a keyed single message
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MessageEntry::Plain(message) => Some(message),
            MessageEntry::Keyed { value, .. } => value.as_str(),
        }
    }

    /// The sub-messages of a keyed list entry
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MessageEntry::Plain(_) => None,
            MessageEntry::Keyed { value, .. } => value.as_list(),
        }
    }

    /// Render the entry as text.
    ///
    /// Lists render as an optional `[key]` line followed by one line per
    /// sub-message. Scalars render as the bare message, key omitted.
    pub fn render(&self, with_key: bool) -> String {
        match self {
            MessageEntry::Plain(message) => message.clone(),
            MessageEntry::Keyed {
                value: MessageValue::Single(message),
                ..
            } => message.clone(),
            MessageEntry::Keyed {
                key,
                value: MessageValue::List(items),
            } => {
                let label = if with_key {
                    format!("[{}]", key)
                } else {
                    String::new()
                };
                format!("{}\n{}", label, items.join("\n"))
            }
        }
    }
}

impl fmt::Display for MessageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

impl PartialEq<str> for MessageEntry {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for MessageEntry {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl From<&str> for MessageEntry {
    fn from(message: &str) -> Self {
        MessageEntry::plain(message)
    }
}

impl From<String> for MessageEntry {
    fn from(message: String) -> Self {
        MessageEntry::Plain(message)
    }
}

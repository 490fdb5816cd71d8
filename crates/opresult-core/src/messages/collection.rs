//! Ordered collection of message entries

use super::entry::{MessageEntry, MessageValue};
use crate::error::Result;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Ordered collection of positional and keyed message entries
///
/// Positional entries are appended in insertion order. Keyed entries are
/// appended the first time their key is seen; inserting the same key again
/// replaces the value in place. Every entry has a distinct key in the
/// structured form, see [`structured_keys`](Messages::structured_keys).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    entries: Vec<MessageEntry>,
}

impl Messages {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageEntry> {
        self.entries.iter()
    }

    /// Entry at an ordinal position in iteration order
    pub fn get(&self, position: usize) -> Option<&MessageEntry> {
        self.entries.get(position)
    }

    pub fn last(&self) -> Option<&MessageEntry> {
        self.entries.last()
    }

    /// Entry stored under `key`; positional entries answer to their index
    pub fn get_by_key(&self, key: &str) -> Option<&MessageEntry> {
        self.structured_keys()
            .iter()
            .position(|k| k == key)
            .and_then(|position| self.entries.get(position))
    }

    /// Append a positional entry
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(MessageEntry::Plain(message.into()));
    }

    /// Store a value under `key`, overwriting any prior entry with that key.
    ///
    /// Integer keys share the index space of positional entries: a key naming
    /// an existing positional entry replaces it in place, and a single message
    /// under the next free index is stored as a positional entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MessageValue>) {
        let key = key.into();
        let value = value.into();
        let keys = self.structured_keys();

        match keys.iter().position(|k| *k == key) {
            Some(position) => {
                let next = next_index_before(&keys, position);
                self.entries[position] = entry_at(key, value, next);
            }
            None => {
                let next = next_index(&keys);
                self.entries.push(entry_at(key, value, next));
            }
        }
    }

    /// Add an entry with the same semantics as [`push`](Self::push) or
    /// [`insert`](Self::insert)
    pub fn push_entry(&mut self, entry: MessageEntry) {
        match entry {
            MessageEntry::Plain(message) => self.push(message),
            MessageEntry::Keyed { key, value } => self.insert(key, value),
        }
    }

    /// Render all entries newline-joined; empty collections render to `""`
    pub fn render(&self, with_key: bool) -> String {
        self.entries
            .iter()
            .map(|entry| entry.render(with_key))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Plain structured form: an array when every entry is positional,
    /// otherwise an object keyed as in [`structured_keys`](Self::structured_keys)
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Keys the entries take in the structured form.
    ///
    /// Positional entries take the next free index: one past the largest
    /// integer key seen so far, starting at 0.
    pub fn structured_keys(&self) -> Vec<String> {
        let mut next = 0u64;
        self.entries
            .iter()
            .map(|entry| match entry {
                MessageEntry::Plain(_) => {
                    let key = next.to_string();
                    next = next.saturating_add(1);
                    key
                }
                MessageEntry::Keyed { key, .. } => {
                    if let Some(index) = integer_key(key) {
                        next = next.max(index.saturating_add(1));
                    }
                    key.clone()
                }
            })
            .collect()
    }

    fn is_list(&self) -> bool {
        !self.entries.is_empty()
            && self
                .entries
                .iter()
                .all(|entry| matches!(entry, MessageEntry::Plain(_)))
    }
}

/// Index value of a canonical non-negative integer key
fn integer_key(key: &str) -> Option<u64> {
    key.parse::<u64>()
        .ok()
        .filter(|index| index.to_string() == key)
}

/// Next free positional index after all of `keys`
fn next_index(keys: &[String]) -> u64 {
    next_index_before(keys, keys.len())
}

/// Next free positional index at `position`, given the structured keys
fn next_index_before(keys: &[String], position: usize) -> u64 {
    keys[..position]
        .iter()
        .filter_map(|key| integer_key(key))
        .map(|index| index.saturating_add(1))
        .max()
        .unwrap_or(0)
}

/// Entry stored under `key` at a point where `next` is the free index
fn entry_at(key: String, value: MessageValue, next: u64) -> MessageEntry {
    match value {
        MessageValue::Single(message) if integer_key(&key) == Some(next) => {
            MessageEntry::Plain(message)
        }
        value => MessageEntry::Keyed { key, value },
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a MessageEntry;
    type IntoIter = std::slice::Iter<'a, MessageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Messages {
    type Item = MessageEntry;
    type IntoIter = std::vec::IntoIter<MessageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<MessageEntry> for Messages {
    fn from_iter<I: IntoIterator<Item = MessageEntry>>(iter: I) -> Self {
        let mut messages = Messages::new();
        for entry in iter {
            messages.push_entry(entry);
        }
        messages
    }
}

impl Extend<MessageEntry> for Messages {
    fn extend<I: IntoIterator<Item = MessageEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push_entry(entry);
        }
    }
}

// Scalars are wrapped into a one-element collection.
impl From<&str> for Messages {
    fn from(message: &str) -> Self {
        std::iter::once(MessageEntry::plain(message)).collect()
    }
}

impl From<String> for Messages {
    fn from(message: String) -> Self {
        std::iter::once(MessageEntry::Plain(message)).collect()
    }
}

impl From<MessageEntry> for Messages {
    fn from(entry: MessageEntry) -> Self {
        std::iter::once(entry).collect()
    }
}

impl From<Vec<MessageEntry>> for Messages {
    fn from(entries: Vec<MessageEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Vec<String>> for Messages {
    fn from(messages: Vec<String>) -> Self {
        messages.into_iter().map(MessageEntry::Plain).collect()
    }
}

impl From<Vec<&str>> for Messages {
    fn from(messages: Vec<&str>) -> Self {
        messages.into_iter().map(MessageEntry::plain).collect()
    }
}

impl Serialize for Messages {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
            for entry in &self.entries {
                if let MessageEntry::Plain(message) = entry {
                    seq.serialize_element(message)?;
                }
            }
            return seq.end();
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in self.structured_keys().iter().zip(&self.entries) {
            match entry {
                MessageEntry::Plain(message) => map.serialize_entry(key, message)?,
                MessageEntry::Keyed { value, .. } => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

struct MessagesVisitor;

impl<'de> Visitor<'de> for MessagesVisitor {
    type Value = Messages;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a message string, a list of messages or a map of keyed messages")
    }

    fn visit_str<E: de::Error>(self, message: &str) -> std::result::Result<Messages, E> {
        Ok(Messages::from(message))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Messages, E> {
        Ok(Messages::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Messages, A::Error> {
        let mut messages = Messages::new();
        while let Some(message) = seq.next_element::<String>()? {
            messages.push(message);
        }
        Ok(messages)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Messages, A::Error> {
        let mut messages = Messages::new();
        while let Some((key, value)) = map.next_entry::<String, MessageValue>()? {
            messages.insert(key, value);
        }
        Ok(messages)
    }
}

impl<'de> Deserialize<'de> for Messages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(MessagesVisitor)
    }
}

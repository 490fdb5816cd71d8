//! Property-based testing strategies for generating test data
//!
//! These strategies produce random but well-formed message entries,
//! configurations and mutation sequences for the core types.

#![cfg(test)]

use crate::config::ResultConfig;
use crate::messages::{MessageEntry, MessageValue, Messages};
use crate::result::OperationResult;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for generating message text
pub fn message_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?]{1,40}"
}

/// Strategy for generating message values
pub fn message_value_strategy() -> impl Strategy<Value = MessageValue> {
    prop_oneof![
        message_text_strategy().prop_map(MessageValue::Single),
        vec(message_text_strategy(), 0..4).prop_map(MessageValue::List),
    ]
}

/// Strategy for generating entries, keys drawn from a small pool of
/// letters and digits so overwrites and index collisions happen
pub fn message_entry_strategy() -> impl Strategy<Value = MessageEntry> {
    prop_oneof![
        message_text_strategy().prop_map(MessageEntry::Plain),
        ("[a-d0-3]", message_value_strategy())
            .prop_map(|(key, value)| MessageEntry::Keyed { key, value }),
    ]
}

/// Strategy for generating collections
pub fn messages_strategy() -> impl Strategy<Value = Messages> {
    vec(message_entry_strategy(), 0..6).prop_map(Messages::from)
}

/// Strategy for generating opaque payloads
pub fn payload_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::from),
        message_text_strategy().prop_map(Value::from),
        vec(any::<u32>(), 0..4).prop_map(Value::from),
    ]
}

/// Strategy for generating construction configurations
pub fn config_strategy() -> impl Strategy<Value = ResultConfig> {
    (
        (
            option::of(any::<bool>()),
            option::of("[A-Za-z ]{0,12}"),
            option::of("[A-Za-z ]{0,12}"),
            option::of("[A-Za-z ]{0,12}"),
            option::of("[A-Za-z ]{0,12}"),
        ),
        (
            option::of(messages_strategy()),
            option::of(messages_strategy()),
            option::of(messages_strategy()),
            option::of(payload_strategy()),
            option::of(payload_strategy()),
        ),
        (
            option::of(0u64..1000),
            option::of(0u64..1000),
            option::of(1u64..100),
            option::of(1u64..100),
            option::of(1u64..100),
            option::of(0u64..1000),
            option::of("[a-z.]{0,12}"),
        ),
    )
        .prop_map(
            |(
                (success, title, success_title, warning_title, error_title),
                (messages, warnings, errors, result, data),
                (count, total_records, page, total_pages, limit, offset, command),
            )| ResultConfig {
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
            },
        )
}

/// A single mutation applied to an [`OperationResult`]
#[derive(Debug, Clone)]
pub enum Mutation {
    AddError(MessageEntry),
    AddWarning(MessageEntry),
    AddMessage(MessageEntry),
    SetErrors(Messages),
    SetWarnings(Messages),
    SetMessages(Messages),
    Override(bool),
}

impl Mutation {
    pub fn apply(self, result: &mut OperationResult) {
        match self {
            Mutation::AddError(entry) => {
                result.add_error_entry(entry);
            }
            Mutation::AddWarning(entry) => {
                result.add_warning_entry(entry);
            }
            Mutation::AddMessage(entry) => {
                result.add_message_entry(entry);
            }
            Mutation::SetErrors(errors) => {
                result.set_errors(errors);
            }
            Mutation::SetWarnings(warnings) => {
                result.set_warnings(warnings);
            }
            Mutation::SetMessages(messages) => {
                result.set_messages(messages);
            }
            Mutation::Override(success) => {
                result.set_success(success);
            }
        }
    }
}

/// Strategy for generating mutations
pub fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        message_entry_strategy().prop_map(Mutation::AddError),
        message_entry_strategy().prop_map(Mutation::AddWarning),
        message_entry_strategy().prop_map(Mutation::AddMessage),
        messages_strategy().prop_map(Mutation::SetErrors),
        messages_strategy().prop_map(Mutation::SetWarnings),
        messages_strategy().prop_map(Mutation::SetMessages),
        any::<bool>().prop_map(Mutation::Override),
    ]
}

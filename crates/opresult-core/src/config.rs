//! Construction-time configuration for [`OperationResult`](crate::OperationResult)
//!
//! Every known attribute has one optional field. Only the fields that are
//! set are copied onto the result; unknown names in a deserialized mapping
//! are ignored.

use crate::error::Result;
use crate::messages::Messages;
use crate::result::ResultExport;
use serde::Deserialize;
use serde_json::Value;

/// Initial values for an [`OperationResult`](crate::OperationResult)
///
/// A `success` value is accepted for symmetry with the export shape, but the
/// flag is recomputed from errors and warnings once the configuration has been
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultConfig {
    pub success: Option<bool>,
    pub title: Option<String>,
    pub success_title: Option<String>,
    pub warning_title: Option<String>,
    pub error_title: Option<String>,
    pub messages: Option<Messages>,
    pub warnings: Option<Messages>,
    pub errors: Option<Messages>,
    pub result: Option<Value>,
    pub data: Option<Value>,
    pub count: Option<u64>,
    pub total_records: Option<u64>,
    pub page: Option<u64>,
    pub total_pages: Option<u64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub command: Option<String>,
}

impl ResultConfig {
    /// Read a configuration from a structured mapping
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Read a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Settable fields of an export.
///
/// The exported `title` is the resolved title, so it is carried over as the
/// explicit title.
impl From<ResultExport> for ResultConfig {
    fn from(export: ResultExport) -> Self {
        Self {
            success: Some(export.success),
            title: Some(export.title),
            success_title: None,
            warning_title: None,
            error_title: None,
            messages: Some(export.messages),
            warnings: Some(export.warnings),
            errors: Some(export.errors),
            result: Some(export.result),
            data: Some(export.data),
            count: export.count,
            total_records: export.total_records,
            page: export.page,
            total_pages: export.total_pages,
            limit: export.limit,
            offset: export.offset,
            command: Some(export.command),
        }
    }
}

//! Plain structured export of an [`OperationResult`]

use super::OperationResult;
use crate::error::Result;
use crate::messages::Messages;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Exported shape of an [`OperationResult`]
///
/// Field order is part of the contract: consumers serialize this directly
/// and expect `success` first and `command` last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultExport {
    pub success: bool,
    pub title: String,
    pub messages: Messages,
    pub warnings: Messages,
    pub errors: Messages,
    pub result: Value,
    pub data: Value,
    pub count: Option<u64>,
    pub total_records: Option<u64>,
    pub page: Option<u64>,
    pub total_pages: Option<u64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub command: String,
}

impl ResultExport {
    /// Read an export back from its structured form
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl OperationResult {
    /// Export the result with the fixed field order.
    ///
    /// `success` and `title` go through their accessors, so the title is the
    /// resolved one.
    pub fn to_export(&self) -> ResultExport {
        ResultExport {
            success: self.is_success(),
            title: self.title().to_string(),
            messages: self.messages.clone(),
            warnings: self.warnings.clone(),
            errors: self.errors.clone(),
            result: self.result.clone(),
            data: self.data.clone(),
            count: self.count,
            total_records: self.total_records,
            page: self.page,
            total_pages: self.total_pages,
            limit: self.limit,
            offset: self.offset,
            command: self.command.clone(),
        }
    }

    /// The export as an ordered `serde_json` object
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_export())?)
    }
}

impl Serialize for OperationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_export().serialize(serializer)
    }
}

impl From<&OperationResult> for ResultExport {
    fn from(result: &OperationResult) -> Self {
        result.to_export()
    }
}

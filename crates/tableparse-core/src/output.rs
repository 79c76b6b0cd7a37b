use serde::Serialize;

use crate::model::{Record, Row, TableResult};

/// Back-reference to the input item an output item was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairedItem {
    pub item: usize,
}

/// One emitted unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputItem {
    /// The payload, shaped by the selected output format.
    pub json: Payload,
    /// Index of the originating input item.
    pub paired_item: PairedItem,
}

impl OutputItem {
    pub fn new(json: Payload, item_index: usize) -> Self {
        Self {
            json,
            paired_item: PairedItem { item: item_index },
        }
    }

    /// Index of the originating input item.
    pub fn item_index(&self) -> usize {
        self.paired_item.item
    }
}

/// Payload of an output item. Serializes without a tag, so each variant
/// produces exactly the JSON object (or array) shown on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// `{tableIndex, tableData}`: one table per item.
    #[serde(rename_all = "camelCase")]
    Table {
        table_index: usize,
        table_data: TableResult,
    },
    /// `{tables: [...]}`: every table of the input item.
    Tables { tables: Vec<TableResult> },
    /// A single record emitted on its own.
    Record(Record),
    /// `{error, rawData}`: a table that could not be listed as records.
    #[serde(rename_all = "camelCase")]
    Unmapped { error: String, raw_data: Vec<Row> },
    /// A table's data without any wrapping object.
    Data(TableResult),
    /// `{error}`: the input item failed and the run continued.
    Failed { error: String },
}

impl Payload {
    /// Error message carried by the payload, if it is error-shaped.
    pub fn error(&self) -> Option<&str> {
        match self {
            Payload::Unmapped { error, .. } | Payload::Failed { error } => Some(error),
            _ => None,
        }
    }
}

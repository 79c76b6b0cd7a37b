use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::TableParseError;
use crate::format::OutputFormat;

/// The only operation a request may ask for.
pub const PARSE_TABLES: &str = "parseTables";

/// Options controlling extraction and output shape.
///
/// A missing or `null` field takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Use each table's first row as field names for the other rows.
    #[serde(deserialize_with = "true_if_null")]
    pub use_first_row_as_header: bool,
    /// Output shape. Unknown names fall back to separate tables.
    #[serde(deserialize_with = "default_if_null")]
    pub output_format: OutputFormat,
    /// Trim leading/trailing whitespace from cell text.
    #[serde(deserialize_with = "true_if_null")]
    pub clean_data: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            use_first_row_as_header: true,
            output_format: OutputFormat::default(),
            clean_data: true,
        }
    }
}

fn true_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn default_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Configuration record for one input item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    #[serde(default = "default_operation", deserialize_with = "operation_or_default")]
    pub operation: String,
    /// Raw HTML to parse. Required; checked by [`validate_request`].
    #[serde(default)]
    pub html_source: Option<String>,
    #[serde(flatten)]
    pub options: ParseOptions,
}

fn default_operation() -> String {
    PARSE_TABLES.to_string()
}

fn operation_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_operation))
}

impl ParseRequest {
    /// A `parseTables` request for the given HTML.
    pub fn new(html_source: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            operation: default_operation(),
            html_source: Some(html_source.into()),
            options,
        }
    }

    /// Read one input item's configuration.
    ///
    /// A wrongly typed field fails this item only; the rest of the batch is
    /// unaffected.
    pub fn from_value(item: &Value) -> Result<Self, TableParseError> {
        ParseRequest::deserialize(item)
            .map_err(|e| TableParseError::InvalidRequest(e.to_string()))
    }

    /// This request as a raw input item.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "operation": self.operation,
            "htmlSource": self.html_source,
            "useFirstRowAsHeader": self.options.use_first_row_as_header,
            "outputFormat": self.options.output_format.as_str(),
            "cleanData": self.options.clean_data,
        })
    }
}

/// Load raw input items from a JSON file.
pub fn load_requests(path: &Path) -> Result<Vec<Value>, TableParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| TableParseError::RequestLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_requests(&content).map_err(|e| TableParseError::RequestLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parse raw input items from a JSON string.
///
/// A top-level array holds one item per element; any other value is a
/// single item. Items are only read as [`ParseRequest`]s when the batch
/// runs, so a malformed item is an error for that item alone.
pub fn parse_requests(json: &str) -> Result<Vec<Value>, TableParseError> {
    Ok(match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        item => vec![item],
    })
}

/// Check a request and return its HTML source.
pub fn validate_request(request: &ParseRequest) -> Result<&str, TableParseError> {
    if request.operation != PARSE_TABLES {
        return Err(TableParseError::UnsupportedOperation(
            request.operation.clone(),
        ));
    }
    request
        .html_source
        .as_deref()
        .ok_or(TableParseError::MissingParameter("htmlSource"))
}

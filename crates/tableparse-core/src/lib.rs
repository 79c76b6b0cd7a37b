pub mod config;
pub mod error;
pub mod extraction;
pub mod format;
pub mod model;
pub mod output;
pub mod parsing;

use serde_json::Value;
use tracing::{debug, warn};

use config::{validate_request, ParseOptions, ParseRequest};
use error::TableParseError;
use extraction::TableExtractor;
use model::TableResult;
use output::{OutputItem, Payload};

/// What to do when an input item fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run and return the error.
    #[default]
    FailFast,
    /// Emit an `{error}` item for the failed input and keep going.
    ContinueOnFail,
}

/// Extract the tables of an HTML document and apply header mapping.
pub fn extract_tables(
    html: &str,
    options: &ParseOptions,
    extractor: &dyn TableExtractor,
) -> Result<Vec<TableResult>, TableParseError> {
    let tables = extractor.extract_tables(html, options.clean_data)?;
    Ok(parsing::build_results(
        tables,
        options.use_first_row_as_header,
    ))
}

/// Main API entry point: parse one HTML document into output items.
///
/// Every item produced is paired with `item_index`.
pub fn parse_tables(
    html: &str,
    options: &ParseOptions,
    extractor: &dyn TableExtractor,
    item_index: usize,
) -> Result<Vec<OutputItem>, TableParseError> {
    let tables = extract_tables(html, options, extractor)?;
    debug!(
        item = item_index,
        tables = tables.len(),
        format = %options.output_format,
        "formatting tables"
    );
    Ok(format::format_tables(
        options.output_format,
        tables,
        item_index,
    ))
}

/// Read, validate and run one raw input item as item `item_index`.
pub fn process_item(
    item: &Value,
    item_index: usize,
    extractor: &dyn TableExtractor,
) -> Result<Vec<OutputItem>, TableParseError> {
    let request = ParseRequest::from_value(item)?;
    let html = validate_request(&request)?;
    parse_tables(html, &request.options, extractor, item_index)
}

/// Run a batch of raw input items, in order.
///
/// Each item is read as a [`ParseRequest`] on its own, so a malformed item
/// fails alone. Output items of all inputs are flattened into one list. Under
/// [`FailurePolicy::FailFast`] the first failure aborts the run; under
/// [`FailurePolicy::ContinueOnFail`] it becomes an `{error}` item.
pub fn run(
    inputs: &[Value],
    extractor: &dyn TableExtractor,
    policy: FailurePolicy,
) -> Result<Vec<OutputItem>, TableParseError> {
    let mut items = Vec::new();

    for (item_index, input) in inputs.iter().enumerate() {
        match process_item(input, item_index, extractor) {
            Ok(produced) => items.extend(produced),
            Err(e) => match policy {
                FailurePolicy::FailFast => {
                    return Err(TableParseError::ItemFailed {
                        item: item_index,
                        source: Box::new(e),
                    });
                }
                FailurePolicy::ContinueOnFail => {
                    warn!(item = item_index, error = %e, "item failed, continuing");
                    items.push(OutputItem::new(
                        Payload::Failed {
                            error: e.to_string(),
                        },
                        item_index,
                    ));
                }
            },
        }
    }

    Ok(items)
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::TableResult;
use crate::output::{OutputItem, Payload};

/// Message attached to raw tables in list format.
pub const LIST_FORMAT_REQUIRES_HEADER: &str =
    "List format requires \"Use First Row as Header\" to be enabled";

/// Shape of the output items produced for one input item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum OutputFormat {
    #[default]
    SeparateTables,
    SingleOutput,
    ListFormat,
    RawArray,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::SeparateTables,
        OutputFormat::SingleOutput,
        OutputFormat::ListFormat,
        OutputFormat::RawArray,
    ];

    /// Resolve a selector name, matched exactly. Anything unrecognized
    /// means separate tables.
    pub fn from_str_loose(s: &str) -> OutputFormat {
        match s {
            "singleOutput" => OutputFormat::SingleOutput,
            "listFormat" => OutputFormat::ListFormat,
            "rawArray" => OutputFormat::RawArray,
            _ => OutputFormat::SeparateTables,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::SeparateTables => "separateTables",
            OutputFormat::SingleOutput => "singleOutput",
            OutputFormat::ListFormat => "listFormat",
            OutputFormat::RawArray => "rawArray",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::SeparateTables => "Each table becomes a separate item in the output",
            OutputFormat::SingleOutput => "All tables combined in a single output item",
            OutputFormat::ListFormat => {
                "Convert tables to a list of objects with column headers as keys"
            }
            OutputFormat::RawArray => {
                "Return just the array of objects without additional properties"
            }
        }
    }
}

impl From<String> for OutputFormat {
    fn from(s: String) -> Self {
        OutputFormat::from_str_loose(&s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reshape the tables of one input item into output items.
pub fn format_tables(
    format: OutputFormat,
    tables: Vec<TableResult>,
    item_index: usize,
) -> Vec<OutputItem> {
    match format {
        OutputFormat::SeparateTables => separate_tables(tables, item_index),
        OutputFormat::SingleOutput => single_output(tables, item_index),
        OutputFormat::ListFormat => list_format(tables, item_index),
        OutputFormat::RawArray => raw_array(tables, item_index),
    }
}

fn separate_tables(tables: Vec<TableResult>, item_index: usize) -> Vec<OutputItem> {
    tables
        .into_iter()
        .enumerate()
        .map(|(table_index, table_data)| {
            OutputItem::new(
                Payload::Table {
                    table_index,
                    table_data,
                },
                item_index,
            )
        })
        .collect()
}

fn single_output(tables: Vec<TableResult>, item_index: usize) -> Vec<OutputItem> {
    vec![OutputItem::new(Payload::Tables { tables }, item_index)]
}

fn list_format(tables: Vec<TableResult>, item_index: usize) -> Vec<OutputItem> {
    let mut items = Vec::new();

    for table in tables {
        match table {
            TableResult::Records(records) => {
                items.extend(
                    records
                        .into_iter()
                        .map(|record| OutputItem::new(Payload::Record(record), item_index)),
                );
            }
            TableResult::Rows(rows) => {
                if rows.is_empty() {
                    continue;
                }
                items.push(OutputItem::new(
                    Payload::Unmapped {
                        error: LIST_FORMAT_REQUIRES_HEADER.to_string(),
                        raw_data: rows,
                    },
                    item_index,
                ));
            }
        }
    }

    items
}

fn raw_array(tables: Vec<TableResult>, item_index: usize) -> Vec<OutputItem> {
    tables
        .into_iter()
        .next()
        .map(|first| OutputItem::new(Payload::Data(first), item_index))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use serde_json::json;

    fn headered() -> TableResult {
        TableResult::Records(vec![
            [("a", "1"), ("b", "2")].into_iter().collect::<Record>(),
            [("a", "3"), ("b", "4")].into_iter().collect::<Record>(),
        ])
    }

    fn raw() -> TableResult {
        TableResult::Rows(vec![vec!["only".into(), "row".into()]])
    }

    fn payloads(items: &[OutputItem]) -> Vec<serde_json::Value> {
        items
            .iter()
            .map(|item| serde_json::to_value(&item.json).unwrap())
            .collect()
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(OutputFormat::from_str_loose("singleOutput"), OutputFormat::SingleOutput);
        assert_eq!(OutputFormat::from_str_loose("listFormat"), OutputFormat::ListFormat);
        assert_eq!(OutputFormat::from_str_loose("rawArray"), OutputFormat::RawArray);
        assert_eq!(OutputFormat::from_str_loose("separateTables"), OutputFormat::SeparateTables);
        assert_eq!(OutputFormat::from_str_loose("bogus"), OutputFormat::SeparateTables);
        assert_eq!(OutputFormat::from_str_loose(""), OutputFormat::SeparateTables);
        assert_eq!(OutputFormat::from_str_loose(" rawArray"), OutputFormat::SeparateTables);
        assert_eq!(OutputFormat::from_str_loose("RawArray"), OutputFormat::SeparateTables);
    }

    #[test]
    fn test_serde_round_trip_names() {
        for format in OutputFormat::ALL {
            let text = serde_json::to_string(&format).unwrap();
            assert_eq!(text, format!("\"{}\"", format.as_str()));
            let back: OutputFormat = serde_json::from_str(&text).unwrap();
            assert_eq!(back, format);
        }
        let unknown: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(unknown, OutputFormat::SeparateTables);
    }

    #[test]
    fn test_separate_tables() {
        let items = format_tables(OutputFormat::SeparateTables, vec![headered(), raw()], 2);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.item_index() == 2));
        assert_eq!(
            payloads(&items),
            vec![
                json!({ "tableIndex": 0, "tableData": [{ "a": "1", "b": "2" }, { "a": "3", "b": "4" }] }),
                json!({ "tableIndex": 1, "tableData": [["only", "row"]] }),
            ]
        );
    }

    #[test]
    fn test_single_output() {
        let items = format_tables(OutputFormat::SingleOutput, vec![raw(), raw()], 0);
        assert_eq!(items.len(), 1);
        assert_eq!(
            payloads(&items)[0],
            json!({ "tables": [[["only", "row"]], [["only", "row"]]] })
        );
    }

    #[test]
    fn test_single_output_without_tables() {
        let items = format_tables(OutputFormat::SingleOutput, vec![], 0);
        assert_eq!(payloads(&items), vec![json!({ "tables": [] })]);
    }

    #[test]
    fn test_list_format() {
        let items = format_tables(OutputFormat::ListFormat, vec![headered(), raw()], 1);
        assert_eq!(
            payloads(&items),
            vec![
                json!({ "a": "1", "b": "2" }),
                json!({ "a": "3", "b": "4" }),
                json!({ "error": LIST_FORMAT_REQUIRES_HEADER, "rawData": [["only", "row"]] }),
            ]
        );
    }

    #[test]
    fn test_raw_array() {
        let items = format_tables(OutputFormat::RawArray, vec![raw(), headered()], 0);
        assert_eq!(payloads(&items), vec![json!([["only", "row"]])]);

        assert!(format_tables(OutputFormat::RawArray, vec![], 0).is_empty());
    }

    #[test]
    fn test_no_tables() {
        for format in [
            OutputFormat::SeparateTables,
            OutputFormat::ListFormat,
            OutputFormat::RawArray,
        ] {
            assert!(format_tables(format, vec![], 0).is_empty(), "{format}");
        }
    }
}

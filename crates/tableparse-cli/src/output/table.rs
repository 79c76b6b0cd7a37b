use tableparse_core::model::{Record, Row, TableResult};
use tableparse_core::output::{OutputItem, Payload};

pub fn print(items: &[OutputItem]) {
    if items.is_empty() {
        println!("No output items.");
        return;
    }
    print!("{}", format_items(items));
}

/// Render output items as plain text, one block per item.
pub fn format_items(items: &[OutputItem]) -> String {
    let mut out = String::new();

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "--- Item {} (input {}) ---\n",
            i,
            item.item_index()
        ));

        match &item.json {
            Payload::Table {
                table_index,
                table_data,
            } => {
                out.push_str(&format!("Table {table_index}\n"));
                out.push_str(&format_table_result(table_data));
            }
            Payload::Tables { tables } => {
                if tables.is_empty() {
                    out.push_str("  (no tables)\n");
                }
                for (table_index, table) in tables.iter().enumerate() {
                    out.push_str(&format!("Table {table_index}\n"));
                    out.push_str(&format_table_result(table));
                }
            }
            Payload::Record(record) => out.push_str(&format_record(record)),
            Payload::Unmapped { error, raw_data } => {
                out.push_str(&format!("  error: {error}\n"));
                out.push_str(&format_rows(None, raw_data));
            }
            Payload::Data(table) => out.push_str(&format_table_result(table)),
            Payload::Failed { error } => out.push_str(&format!("  error: {error}\n")),
        }
    }

    out
}

fn format_table_result(table: &TableResult) -> String {
    match table {
        TableResult::Rows(rows) => format_rows(None, rows),
        TableResult::Records(records) => {
            // Columns in first-seen order across all records.
            let mut columns: Vec<String> = Vec::new();
            for record in records {
                for key in record.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.to_string());
                    }
                }
            }
            let rows: Vec<Row> = records
                .iter()
                .map(|record| {
                    columns
                        .iter()
                        .map(|c| record.get(c).unwrap_or_default().to_string())
                        .collect()
                })
                .collect();
            format_rows(Some(columns.as_slice()), &rows)
        }
    }
}

fn format_record(record: &Record) -> String {
    let width = record.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    record
        .iter()
        .map(|(key, value)| format!("  {key:<width$}  {value}\n"))
        .collect()
}

/// Draw rows as left-aligned columns, with an optional underlined header.
fn format_rows(header: Option<&[String]>, rows: &[Row]) -> String {
    let column_count = rows
        .iter()
        .map(|r| r.len())
        .chain(header.map(|h| h.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; column_count];
    for row in header.into_iter().chain(rows.iter().map(|r| r.as_slice())) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_text(cell).chars().count());
        }
    }

    let mut out = String::new();
    if let Some(header) = header {
        out.push_str(&format_line(header, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&format_line(&rule, &widths));
    }
    for row in rows {
        out.push_str(&format_line(row, &widths));
    }
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", display_text(cell), width = *width))
        .collect();
    format!("  {}\n", line.join("  ").trim_end())
}

/// Keep every cell on one line.
fn display_text(cell: &str) -> String {
    cell.split_whitespace().collect::<Vec<_>>().join(" ")
}

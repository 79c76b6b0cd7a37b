//! HTML table extraction backed by the `scraper` crate.
//!
//! Parsing goes through html5ever, so malformed markup is repaired the way a
//! browser would and never produces an error.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::TableParseError;
use crate::extraction::TableExtractor;
use crate::model::{Row, Table};
use crate::parsing::normalize::clean_cell;

const TABLE_SELECTOR: &str = "table";
const ROW_SELECTOR: &str = "tr";
const CELL_SELECTOR: &str = "th, td";

/// Default extraction backend.
///
/// Queries are flat: nested tables show up as tables of their own, and their
/// rows and cells are also collected by every enclosing table.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TableExtractor for HtmlExtractor {
    fn extract_tables(&self, html: &str, clean_data: bool) -> Result<Vec<Table>, TableParseError> {
        let table_selector = compile(TABLE_SELECTOR)?;
        let row_selector = compile(ROW_SELECTOR)?;
        let cell_selector = compile(CELL_SELECTOR)?;

        let document = Html::parse_document(html);

        let tables: Vec<Table> = document
            .select(&table_selector)
            .map(|table| collect_rows(table, &row_selector, &cell_selector, clean_data))
            .filter(|rows| !rows.is_empty())
            .map(Table::new)
            .collect();

        debug!(
            backend = self.backend_name(),
            tables = tables.len(),
            "extracted tables"
        );
        Ok(tables)
    }

    fn backend_name(&self) -> &str {
        "scraper"
    }
}

fn compile(selector: &str) -> Result<Selector, TableParseError> {
    Selector::parse(selector)
        .map_err(|e| TableParseError::Extraction(format!("invalid selector '{selector}': {e}")))
}

fn collect_rows(
    table: ElementRef<'_>,
    row_selector: &Selector,
    cell_selector: &Selector,
    clean_data: bool,
) -> Vec<Row> {
    table
        .select(row_selector)
        .map(|row| {
            row.select(cell_selector)
                .map(|cell| cell_text(cell, clean_data))
                .collect::<Row>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}

fn cell_text(cell: ElementRef<'_>, clean_data: bool) -> String {
    let text: String = cell.text().collect();
    if clean_data {
        clean_cell(&text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<Table> {
        HtmlExtractor::new().extract_tables(html, true).unwrap()
    }

    #[test]
    fn test_basic_table() {
        let tables = extract(
            "<table><tr><th>Name</th><th>Age</th></tr><tr><td>Alice</td><td>30</td></tr></table>",
        );
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].rows,
            vec![vec!["Name", "Age"], vec!["Alice", "30"]]
        );
    }

    #[test]
    fn test_no_tables() {
        assert!(extract("<p>nothing to see</p>").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_empty_rows_and_tables_dropped() {
        let html = r#"
        <table><tr></tr><tr><td>kept</td></tr></table>
        <table><tr></tr></table>
        <table></table>
        "#;
        let tables = extract(html);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows, vec![vec!["kept"]]);
    }

    #[test]
    fn test_thead_tbody_tfoot_rows_in_order() {
        let html = r#"
        <table>
            <thead><tr><th>h</th></tr></thead>
            <tbody><tr><td>b1</td></tr><tr><td>b2</td></tr></tbody>
            <tfoot><tr><td>f</td></tr></tfoot>
        </table>
        "#;
        let tables = extract(html);
        assert_eq!(
            tables[0].rows,
            vec![vec!["h"], vec!["b1"], vec!["b2"], vec!["f"]]
        );
    }

    #[test]
    fn test_nested_tables_are_flat() {
        let html = r#"
        <table>
            <tr><td>outer<table><tr><td>inner</td></tr></table></td></tr>
        </table>
        "#;
        let tables = extract(html);
        assert_eq!(tables.len(), 2);
        // The outer table sees the nested row and cell too.
        assert_eq!(tables[0].rows, vec![vec!["outerinner", "inner"], vec!["inner"]]);
        assert_eq!(tables[1].rows, vec![vec!["inner"]]);
    }

    #[test]
    fn test_cell_text_includes_descendants() {
        let tables = extract("<table><tr><td><b>bold</b> and <i>italic</i></td></tr></table>");
        assert_eq!(tables[0].rows, vec![vec!["bold and italic"]]);
    }

    #[test]
    fn test_clean_data_flag() {
        let html = "<table><tr><td>  padded\n</td></tr></table>";

        let cleaned = HtmlExtractor::new().extract_tables(html, true).unwrap();
        assert_eq!(cleaned[0].rows, vec![vec!["padded"]]);

        let raw = HtmlExtractor::new().extract_tables(html, false).unwrap();
        assert_eq!(raw[0].rows, vec![vec!["  padded\n"]]);
    }

    #[test]
    fn test_malformed_html_is_lenient() {
        let tables = extract("<table><tr><td>a<td>b<tr><td>c");
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows, vec![vec!["a", "b"], vec!["c"]]);
    }
}

pub mod header;
pub mod normalize;

use crate::model::{Table, TableResult};
use header::map_header;

/// Apply header mapping to every extracted table, keeping table order.
pub fn build_results(tables: Vec<Table>, use_first_row_as_header: bool) -> Vec<TableResult> {
    tables
        .into_iter()
        .map(|table| map_header(table, use_first_row_as_header))
        .collect()
}

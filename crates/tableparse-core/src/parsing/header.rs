use crate::model::{Record, Table, TableResult};

/// Apply header mapping to a table.
///
/// With the flag off, or with a single row, the rows are returned as they
/// are. Otherwise the first row names the fields of every following row.
/// Fields pair up by position while both the header and the row have an
/// entry: short rows lose their trailing fields, long rows their extra
/// cells. A repeated header name keeps the later value.
pub fn map_header(table: Table, use_first_row_as_header: bool) -> TableResult {
    if !use_first_row_as_header || table.len() < 2 {
        return TableResult::Rows(table.rows);
    }

    let mut rows = table.rows.into_iter();
    let header = rows.next().unwrap_or_default();

    let records = rows
        .map(|row| {
            header
                .iter()
                .zip(row)
                .map(|(name, value)| (name.as_str(), value))
                .collect::<Record>()
        })
        .collect();

    TableResult::Records(records)
}

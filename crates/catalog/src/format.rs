//! Text form of a schema file:
//!
//! ```text
//! TABLE:<name>
//! COLUMNS:
//! <column>,<type>
//! ```

use {
    def::{ColumnDef, TableSchema},
    std::iter,
};

const TABLE_PREFIX: &str = "TABLE:";
const COLUMNS_HEADER: &str = "COLUMNS:";

pub(crate) fn encode(schema: &TableSchema) -> String {
    let header = format!("{}{}\n{}\n", TABLE_PREFIX, schema.name, COLUMNS_HEADER);
    let columns = schema
        .columns
        .iter()
        .map(|column| format!("{},{}\n", column.name, column.data_type));

    iter::once(header).chain(columns).collect()
}

/// Returns the 1-based number of the first malformed line on failure.
pub(crate) fn decode(text: &str) -> Result<TableSchema, usize> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let name = match lines.next() {
        Some((_, line)) => line.strip_prefix(TABLE_PREFIX).ok_or(1usize)?,
        None => return Err(1),
    };
    match lines.next() {
        Some((_, COLUMNS_HEADER)) => {}
        _ => return Err(2),
    }

    let mut columns = vec![];
    for (number, line) in lines {
        if line.is_empty() {
            continue;
        }

        let (column, data_type) = line.split_once(',').ok_or(number)?;
        let data_type = data_type.parse().map_err(|_| number)?;
        columns.push(ColumnDef::new(column, data_type));
    }

    Ok(TableSchema::new(name, columns))
}

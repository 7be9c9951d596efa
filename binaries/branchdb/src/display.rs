use {
    comfy_table::{presets::ASCII_FULL, Cell, Table},
    executor::{Outcome, ResultSet},
};

pub(crate) fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::DatabaseCreated { name } => format!("Database '{}' created", name),
        Outcome::TableCreated { name } => format!("Table '{}' created", name),
        Outcome::DatabaseChanged { name } => format!("Using database '{}'", name),
        Outcome::DatabaseDropped { name } => format!("Database '{}' dropped", name),
        Outcome::TableDropped { name } => format!("Table '{}' dropped", name),
        Outcome::Listing { title, names } => {
            let mut table = table(vec![title.clone()]);
            for name in names {
                table.add_row(vec![Cell::new(name)]);
            }

            format!("{}\n{}", table, row_count(names.len()))
        }
        Outcome::Inserted { table, rows: 1 } => format!("1 row inserted into '{}'", table),
        Outcome::Inserted { table, rows } => format!("{} rows inserted into '{}'", rows, table),
        Outcome::Selected(result) => render_result_set(result),
    }
}

fn render_result_set(result: &ResultSet) -> String {
    let mut table = table(result.columns.clone());
    for row in &result.rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }

    format!("{}\n{}", table, row_count(result.rows.len()))
}

fn table(header: Vec<String>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(header);
    table
}

fn row_count(rows: usize) -> String {
    format!("{} row(s) selected", rows)
}

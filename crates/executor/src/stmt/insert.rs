use {
    crate::{
        error::{ArityMismatchSnafu, Result, StorageSnafu},
        Executor, Outcome, Session,
    },
    catalog::Directory,
    parser::ast::{Columns, InsertStmt, Literal},
    snafu::prelude::*,
    tracing::warn,
};

impl<D: Directory> Executor<D> {
    /// Values are written in schema column order; a column list in the
    /// statement does not reorder them.
    pub(crate) fn insert(&self, session: &Session, stmt: InsertStmt) -> Result<Outcome> {
        let database = session.require_database()?;
        let InsertStmt {
            table,
            columns,
            values,
        } = stmt;

        let schema = self.resolve_schema(database, &table)?;
        ensure!(
            values.len() == schema.columns.len(),
            ArityMismatchSnafu {
                table: table.as_str(),
                expected: schema.columns.len(),
                got: values.len(),
            }
        );

        if let Some(Columns::Named(names)) = &columns {
            if !names.iter().map(|n| n.as_str()).eq(schema.column_names()) {
                warn!(
                    "column list of INSERT INTO {} differs from the table, values are stored in table order",
                    table
                );
            }
        }

        let mut file = self.open_table(database, &schema)?;
        let literals = values.iter().map(Literal::lexeme).collect::<Vec<_>>();
        let row = file.codec().parse_row(&literals).context(StorageSnafu)?;
        file.append_row(&row).context(StorageSnafu)?;

        Ok(Outcome::Inserted {
            table: table.0,
            rows: 1,
        })
    }
}

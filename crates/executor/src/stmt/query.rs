use {
    crate::{
        error::{Result, StorageSnafu},
        predicate::Predicate,
        Executor, Outcome, ResultSet, Session,
    },
    catalog::Directory,
    def::TableSchema,
    parser::ast::{Columns, SelectStmt},
    snafu::prelude::*,
    tracing::debug,
};

impl<D: Directory> Executor<D> {
    pub(crate) fn select(&self, session: &Session, stmt: SelectStmt) -> Result<Outcome> {
        let database = session.require_database()?;
        let SelectStmt {
            columns,
            table,
            filter,
        } = stmt;

        let schema = self.resolve_schema(database, &table)?;
        let projection = projection(&schema, &columns);
        let predicate = filter
            .map(|clause| Predicate::bind(&schema, clause))
            .transpose()?;

        let mut file = self.open_table(database, &schema)?;
        let mut rows = vec![];

        for index in file.scan() {
            if let Some(predicate) = &predicate {
                if !predicate.evaluate(&mut file, index)? {
                    continue;
                }
            }

            let row = file.read_row(index).context(StorageSnafu)?;
            rows.push(
                row.into_iter()
                    .zip(&projection)
                    .filter_map(|(value, &shown)| shown.then_some(value))
                    .collect(),
            );
        }
        debug!(
            "scanned {} rows of {}, {} matched",
            file.row_count(),
            table,
            rows.len()
        );

        Ok(Outcome::Selected(ResultSet {
            columns: schema
                .columns
                .into_iter()
                .zip(&projection)
                .filter_map(|(col, &shown)| shown.then_some(col.name))
                .collect(),
            rows,
        }))
    }
}

/// For each schema column, whether it is displayed. Requested names missing
/// from the schema are ignored.
fn projection(schema: &TableSchema, columns: &Columns) -> Vec<bool> {
    match columns {
        Columns::Wildcard => vec![true; schema.columns.len()],
        Columns::Named(names) => schema
            .column_names()
            .map(|col| names.iter().any(|name| name.as_str() == col))
            .collect(),
    }
}

use {
    crate::{
        error::{from_catalog, Result, StorageSnafu},
        Executor, Outcome, Session,
    },
    catalog::Directory,
    def::{ColumnDef, TableSchema},
    parser::ast::{CreateTableStmt, Identifier},
    snafu::prelude::*,
    storage::{IndexFile, TableFile},
    tracing::{info, warn},
};

impl<D: Directory> Executor<D> {
    pub(crate) fn create_database(&self, name: Identifier) -> Result<Outcome> {
        self.catalog
            .create_database(name.as_str())
            .map_err(from_catalog)?;

        Ok(Outcome::DatabaseCreated { name: name.0 })
    }

    pub(crate) fn create_table(&self, session: &Session, stmt: CreateTableStmt) -> Result<Outcome> {
        let database = session.require_database()?;
        let CreateTableStmt { name, columns } = stmt;

        let schema = TableSchema::new(
            name.as_str(),
            columns
                .into_iter()
                .map(|col| ColumnDef::new(col.name.0, col.data_type))
                .collect(),
        );

        self.catalog
            .create_schema(database, &schema)
            .map_err(from_catalog)?;
        if let Err(e) = self.create_table_files(database, &schema) {
            // a table without its files must not stay listed
            if let Err(drop_err) = self.catalog.drop_schema(database, &schema.name) {
                warn!("failed to remove schema of {}.{}: {}", database, schema.name, drop_err);
            }
            return Err(e);
        }
        info!(
            "created table {}.{} with {} columns",
            database,
            schema.name,
            schema.columns.len()
        );

        Ok(Outcome::TableCreated { name: schema.name })
    }

    /// Creates empty data and index files, replacing leftovers of a former table.
    fn create_table_files(&self, database: &str, schema: &TableSchema) -> Result<()> {
        TableFile::create(self.catalog.table_file_path(database, &schema.name), schema)
            .context(StorageSnafu)?;
        IndexFile::create(self.catalog.index_file_path(database, &schema.name))
            .context(StorageSnafu)?;

        Ok(())
    }

    pub(crate) fn drop_database(&self, session: &mut Session, name: Identifier) -> Result<Outcome> {
        self.catalog
            .drop_database(name.as_str())
            .map_err(from_catalog)?;

        if session.leave_database(name.as_str()) {
            info!("dropped the current database {}", name);
        }

        Ok(Outcome::DatabaseDropped { name: name.0 })
    }

    pub(crate) fn drop_table(&self, session: &Session, name: Identifier) -> Result<Outcome> {
        let database = session.require_database()?;

        self.catalog
            .drop_table(database, name.as_str())
            .map_err(from_catalog)?;

        Ok(Outcome::TableDropped { name: name.0 })
    }
}

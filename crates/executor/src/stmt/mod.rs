mod ddl;
mod insert;
mod query;
mod utility;

use {
    crate::{
        error::{from_catalog, Result, StorageSnafu},
        Executor,
    },
    catalog::Directory,
    def::TableSchema,
    parser::ast::Identifier,
    snafu::prelude::*,
    storage::TableFile,
};

impl<D: Directory> Executor<D> {
    fn resolve_schema(&self, database: &str, table: &Identifier) -> Result<TableSchema> {
        self.catalog
            .read_schema(database, table.as_str())
            .map_err(from_catalog)
    }

    fn open_table(&self, database: &str, schema: &TableSchema) -> Result<TableFile> {
        let path = self.catalog.table_file_path(database, &schema.name);

        TableFile::open(path, schema).context(StorageSnafu)
    }
}

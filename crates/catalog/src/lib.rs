mod directory;
mod error;
mod format;

pub use {
    directory::{Directory, LocalDirectory},
    error::{Error, Result},
};

use {
    def::TableSchema,
    error::{
        AlreadyExistsSnafu, CorruptedSnafu, DatabaseExistsSnafu, IoSnafu, NoSuchDatabaseSnafu,
        NotFoundSnafu,
    },
    snafu::prelude::*,
    std::{
        fs::{self, OpenOptions},
        io::{ErrorKind, Write},
        path::{Path, PathBuf},
    },
    tracing::info,
};

const DATABASES_DIR: &str = "databases";

pub const SCHEMA_EXT: &str = "schema";
pub const TABLE_EXT: &str = "table";
pub const INDEX_EXT: &str = "idx";

/// Databases are directories under `<data_dir>/databases`, each table is a
/// `<table>.schema` file inside one of them.
#[derive(Debug)]
pub struct Catalog<D = LocalDirectory> {
    root: PathBuf,
    dir: D,
}

impl Catalog {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_directory(data_dir, LocalDirectory)
    }
}

impl<D: Directory> Catalog<D> {
    pub fn with_directory(data_dir: impl AsRef<Path>, dir: D) -> Self {
        Self {
            root: data_dir.as_ref().join(DATABASES_DIR),
            dir,
        }
    }

    /// Creates the `databases` directory if it is missing.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.root).context(IoSnafu { path: &self.root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database_path(&self, database: &str) -> PathBuf {
        self.root.join(database)
    }

    pub fn schema_path(&self, database: &str, table: &str) -> PathBuf {
        self.file_path(database, table, SCHEMA_EXT)
    }

    pub fn table_file_path(&self, database: &str, table: &str) -> PathBuf {
        self.file_path(database, table, TABLE_EXT)
    }

    pub fn index_file_path(&self, database: &str, table: &str) -> PathBuf {
        self.file_path(database, table, INDEX_EXT)
    }

    fn file_path(&self, database: &str, table: &str, ext: &str) -> PathBuf {
        self.database_path(database)
            .join(format!("{}.{}", table, ext))
    }

    pub fn database_exists(&self, database: &str) -> bool {
        self.dir.directory_exists(&self.database_path(database))
    }

    fn ensure_database(&self, database: &str) -> Result<PathBuf> {
        let path = self.database_path(database);
        ensure!(
            self.dir.directory_exists(&path),
            NoSuchDatabaseSnafu { name: database }
        );

        Ok(path)
    }

    pub fn create_database(&self, database: &str) -> Result<()> {
        let path = self.database_path(database);
        ensure!(
            !self.dir.directory_exists(&path),
            DatabaseExistsSnafu { name: database }
        );

        self.dir
            .create_directory(&path)
            .context(IoSnafu { path: &path })?;
        info!("created database {}", database);

        Ok(())
    }

    pub fn drop_database(&self, database: &str) -> Result<()> {
        let path = self.ensure_database(database)?;

        self.dir
            .remove_directory_recursive(&path)
            .context(IoSnafu { path: &path })?;
        info!("dropped database {}", database);

        Ok(())
    }

    /// Database names in ascending order.
    pub fn list_databases(&self) -> Result<Vec<String>> {
        let mut names = self
            .dir
            .list_subdirectories(&self.root)
            .context(IoSnafu { path: &self.root })?;
        names.sort();

        Ok(names)
    }

    /// Table names in ascending order.
    pub fn list_tables(&self, database: &str) -> Result<Vec<String>> {
        let path = self.ensure_database(database)?;

        let mut names = self
            .dir
            .list_files(&path, SCHEMA_EXT)
            .context(IoSnafu { path: &path })?;
        names.sort();

        Ok(names)
    }

    pub fn create_schema(&self, database: &str, schema: &TableSchema) -> Result<()> {
        self.ensure_database(database)?;
        let path = self.schema_path(database, &schema.name);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return AlreadyExistsSnafu {
                    table: &schema.name,
                }
                .fail()
            }
            Err(e) => return Err(e).context(IoSnafu { path }),
        };

        file.write_all(format::encode(schema).as_bytes())
            .context(IoSnafu { path: &path })
    }

    pub fn read_schema(&self, database: &str, table: &str) -> Result<TableSchema> {
        self.ensure_database(database)?;
        let path = self.schema_path(database, table);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return NotFoundSnafu { table }.fail()
            }
            Err(e) => return Err(e).context(IoSnafu { path }),
        };

        format::decode(&text).map_err(|line| CorruptedSnafu { path, line }.build())
    }

    pub fn table_exists(&self, database: &str, table: &str) -> bool {
        self.dir.file_exists(&self.schema_path(database, table))
    }

    pub fn drop_schema(&self, database: &str, table: &str) -> Result<()> {
        self.ensure_database(database)?;
        let path = self.schema_path(database, table);

        match self.dir.delete_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => NotFoundSnafu { table }.fail(),
            Err(e) => Err(e).context(IoSnafu { path }),
        }
    }

    /// Removes the schema together with the table and index files. Data files
    /// that are already gone are skipped.
    pub fn drop_table(&self, database: &str, table: &str) -> Result<()> {
        self.drop_schema(database, table)?;

        for path in [
            self.table_file_path(database, table),
            self.index_file_path(database, table),
        ] {
            match self.dir.delete_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e).context(IoSnafu { path }),
            }
        }
        info!("dropped table {}.{}", database, table);

        Ok(())
    }
}

mod error;
mod outcome;
mod predicate;
mod session;
mod stmt;

pub use {
    error::{Error, Result},
    outcome::{Outcome, ResultSet},
    session::Session,
};

use {
    catalog::{Catalog, Directory, LocalDirectory},
    error::{CatalogSnafu, ParseSnafu},
    parser::{ast::Statement, Parser},
    snafu::prelude::*,
    std::path::Path,
    tracing::debug,
};

/// Runs statements against the databases of one data directory. All state
/// between statements lives in the caller's `Session`.
pub struct Executor<D = LocalDirectory> {
    catalog: Catalog<D>,
}

impl Executor {
    /// Opens `data_dir`, creating its `databases` directory when missing.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let catalog = Catalog::new(data_dir);
        catalog.init().context(CatalogSnafu)?;

        Ok(Self::new(catalog))
    }
}

impl<D: Directory> Executor<D> {
    pub fn new(catalog: Catalog<D>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog<D> {
        &self.catalog
    }

    pub fn execute(&self, session: &mut Session, stmt: Statement) -> Result<Outcome> {
        debug!(database = ?session.database(), "executing {:?}", stmt);

        match stmt {
            Statement::CreateDatabase { name } => self.create_database(name),
            Statement::CreateTable(stmt) => self.create_table(session, stmt),
            Statement::DropDatabase { name } => self.drop_database(session, name),
            Statement::DropTable { name } => self.drop_table(session, name),
            Statement::Use { database } => self.use_database(session, database),
            Statement::Show(target) => self.show(session, target),
            Statement::Insert(stmt) => self.insert(session, stmt),
            Statement::Select(stmt) => self.select(session, stmt),
        }
    }

    /// Parses and executes every statement in `sql`. A statement that fails
    /// to parse or execute does not stop the ones after it.
    pub fn execute_sql(&self, session: &mut Session, sql: &str) -> Vec<Result<Outcome>> {
        Parser::new(sql)
            .map(|stmt| {
                stmt.context(ParseSnafu)
                    .and_then(|stmt| self.execute(session, stmt))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::tempdir};

    #[test]
    fn errors_do_not_stop_the_script() {
        let temp_dir = tempdir().unwrap();
        let executor = Executor::open(temp_dir.path()).unwrap();
        let mut session = Session::new();

        let results = executor.execute_sql(
            &mut session,
            "USE nope; CREATE DATABASE db; SELECT FROM; USE db; SHOW TABLES;",
        );

        assert_eq!(results.len(), 5);
        assert!(matches!(&results[0], Err(Error::NoSuchDatabase { name }) if name == "nope"));
        assert!(matches!(&results[1], Ok(Outcome::DatabaseCreated { .. })));
        assert!(matches!(&results[2], Err(Error::Parse { .. })));
        assert!(matches!(&results[3], Ok(Outcome::DatabaseChanged { .. })));
        assert_eq!(
            results[4].as_ref().unwrap(),
            &Outcome::Listing {
                title: "Tables in db".into(),
                names: vec![],
            }
        );
        assert_eq!(session.database(), Some("db"));

        temp_dir.close().unwrap();
    }

    #[test]
    fn open_creates_databases_dir() {
        let temp_dir = tempdir().unwrap();

        let executor = Executor::open(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("databases").is_dir());
        assert_eq!(executor.catalog().root(), temp_dir.path().join("databases"));

        temp_dir.close().unwrap();
    }
}

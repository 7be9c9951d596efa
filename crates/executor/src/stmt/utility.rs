use {
    crate::{
        error::{from_catalog, NoSuchDatabaseSnafu, Result},
        Executor, Outcome, Session,
    },
    catalog::Directory,
    parser::ast::{Identifier, ShowTarget},
    snafu::prelude::*,
    tracing::info,
};

impl<D: Directory> Executor<D> {
    pub(crate) fn use_database(&self, session: &mut Session, database: Identifier) -> Result<Outcome> {
        ensure!(
            self.catalog.database_exists(database.as_str()),
            NoSuchDatabaseSnafu {
                name: database.as_str()
            }
        );

        session.set_database(database.as_str());
        info!("switched to database {}", database);

        Ok(Outcome::DatabaseChanged { name: database.0 })
    }

    pub(crate) fn show(&self, session: &Session, target: ShowTarget) -> Result<Outcome> {
        let (title, names) = match target {
            ShowTarget::Databases => (
                "Databases".to_string(),
                self.catalog.list_databases().map_err(from_catalog)?,
            ),
            ShowTarget::Tables => {
                let database = session.require_database()?;
                (
                    format!("Tables in {}", database),
                    self.catalog.list_tables(database).map_err(from_catalog)?,
                )
            }
        };

        Ok(Outcome::Listing { title, names })
    }
}

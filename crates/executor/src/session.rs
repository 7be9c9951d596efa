use {
    crate::error::{NoDatabaseSelectedSnafu, Result},
    snafu::prelude::*,
};

/// Per-connection state carried between statements.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    database: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub(crate) fn set_database(&mut self, database: impl Into<String>) {
        self.database = Some(database.into());
    }

    /// Forgets the current database if it is `database`.
    pub(crate) fn leave_database(&mut self, database: &str) -> bool {
        if self.database() == Some(database) {
            self.database = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn require_database(&self) -> Result<&str> {
        self.database().context(NoDatabaseSelectedSnafu)
    }
}

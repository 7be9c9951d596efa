use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("no database selected, run `USE <database>;` first"))]
    NoDatabaseSelected,

    #[snafu(display("database '{}' does not exist", name))]
    NoSuchDatabase { name: String },

    #[snafu(display("table '{}' does not exist", name))]
    NoSuchTable { name: String },

    #[snafu(display(
        "table '{}' has {} columns but {} values were supplied",
        table,
        expected,
        got
    ))]
    ArityMismatch {
        table: String,
        expected: usize,
        got: usize,
    },

    #[snafu(display("column '{}' does not exist in table '{}'", column, table))]
    NoSuchColumn { column: String, table: String },

    #[snafu(display("{}", source))]
    Parse { source: parser::Error },

    #[snafu(display("{}", source))]
    Catalog {
        #[snafu(backtrace)]
        source: catalog::Error,
    },

    #[snafu(display("{}", source))]
    Storage {
        #[snafu(backtrace)]
        source: storage::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Lifts the catalog's lookup failures to the matching execution errors.
pub(crate) fn from_catalog(source: catalog::Error) -> Error {
    match source {
        catalog::Error::NoSuchDatabase { name } => Error::NoSuchDatabase { name },
        catalog::Error::NotFound { table } => Error::NoSuchTable { name: table },
        source => Error::Catalog { source },
    }
}

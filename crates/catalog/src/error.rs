use {snafu::prelude::*, std::path::PathBuf};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("database '{}' already exists", name))]
    DatabaseExists { name: String },

    #[snafu(display("database '{}' does not exist", name))]
    NoSuchDatabase { name: String },

    #[snafu(display("table '{}' already exists", table))]
    AlreadyExists { table: String },

    #[snafu(display("table '{}' does not exist", table))]
    NotFound { table: String },

    #[snafu(display("schema file {} is corrupted at line {}", path.display(), line))]
    Corrupted { path: PathBuf, line: usize },

    #[snafu(display("failed to access {}: {}", path.display(), source))]
    Io {
        path: PathBuf,
        source: std::io::Error,
        backtrace: snafu::Backtrace,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

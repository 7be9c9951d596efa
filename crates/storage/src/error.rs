use {
    def::DataType,
    snafu::{prelude::*, Backtrace},
    std::{io, path::PathBuf},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to access {}: {}", path.display(), source))]
    Io {
        path: PathBuf,
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("malformed row: {}", source))]
    Codec { source: io::Error },

    #[snafu(display("`{}` is not a valid {} value", literal, data_type))]
    InvalidLiteral { literal: String, data_type: DataType },

    #[snafu(display("expected {} values, got {}", expected, got))]
    ArityMismatch { expected: usize, got: usize },

    #[snafu(display("value {} is {}, column is {}", index, got, expected))]
    TypeMismatch {
        index: usize,
        expected: DataType,
        got: DataType,
    },

    #[snafu(display("row {} is out of range, the table has {} rows", index, row_count))]
    RowOutOfRange { index: u32, row_count: u32 },

    #[snafu(display("column {} is out of range, the table has {} columns", index, columns))]
    ColumnOutOfRange { index: usize, columns: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

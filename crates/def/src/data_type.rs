use {
    snafu::prelude::*,
    std::{fmt::Display, str::FromStr},
};

#[derive(Debug, PartialEq, Snafu)]
pub enum Error {
    #[snafu(display("unknown data type `{}`", name))]
    UnknownDataType { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Bytes a varchar slot occupies on disk.
pub const VARCHAR_WIDTH: usize = 64;

/// Longest string a varchar keeps; the last byte of the slot stays NUL.
pub const VARCHAR_CAPACITY: usize = VARCHAR_WIDTH - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Varchar,
    Double,
    /// Stored as a raw integer, no calendar semantics.
    Date,
}

impl DataType {
    /// Fixed on-disk width of one value.
    pub const fn width(&self) -> usize {
        match self {
            Self::Int => 4,
            Self::Varchar => VARCHAR_WIDTH,
            Self::Double => 8,
            Self::Date => 4,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Varchar => "varchar",
            Self::Double => "double",
            Self::Date => "date",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [Self::Int, Self::Varchar, Self::Double, Self::Date]
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .context(UnknownDataTypeSnafu { name: s })
    }
}

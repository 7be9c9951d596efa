use {crate::lexer, snafu::prelude::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display(
        "syntax error at position {}: expected {}, found {}",
        position,
        expected,
        found
    ))]
    Syntax {
        expected: String,
        found: String,
        position: usize,
    },

    #[snafu(display("{}", source))]
    Lexing { source: lexer::Error },
}

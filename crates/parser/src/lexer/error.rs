use {crate::common::Span, snafu::prelude::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("no closing quote for string starting at position {}", span.start()))]
    UnterminatedString { span: Span },

    #[snafu(display("unexpected char `{}` at position {}", c, position))]
    UnexpectedChar { c: char, position: usize },
}

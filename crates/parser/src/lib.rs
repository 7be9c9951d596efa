pub mod ast;
mod common;
mod lexer;
mod parser;

pub use self::{
    common::{Span, Spanned},
    lexer::{Error as LexError, Keyword, Lexer, Token, MAX_LEXEME_LEN},
    parser::{Error, Parser, Result},
};

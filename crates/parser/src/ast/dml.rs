use {
    super::{Identifier, WhereClause},
    common::pub_fields_struct,
};

#[derive(Debug, PartialEq)]
pub enum Columns {
    Wildcard,
    /// In the order written; duplicates are kept.
    Named(Vec<Identifier>),
}

/// A literal keeps its lexeme verbatim, conversion happens against the column type.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String),
    String(String),
}

impl Literal {
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Number(s) | Self::String(s) => s,
        }
    }

    pub fn into_lexeme(self) -> String {
        match self {
            Self::Number(s) | Self::String(s) => s,
        }
    }
}

pub_fields_struct! {
    #[derive(Debug, PartialEq)]
    struct SelectStmt {
        columns: Columns,
        table: Identifier,
        filter: Option<WhereClause>,
    }

    #[derive(Debug, PartialEq)]
    struct InsertStmt {
        table: Identifier,
        /// Parsed but not used to place values, which always follow the schema order.
        columns: Option<Columns>,
        values: Vec<Literal>,
    }
}

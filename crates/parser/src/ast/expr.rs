use {
    super::{Identifier, Literal},
    common::pub_fields_struct,
    std::fmt::Display,
};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Comparator {
    Equal,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Equal => "=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
        })
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LogicalOp {
    And,
    Or,
}

pub_fields_struct! {
    #[derive(Debug, PartialEq)]
    struct Condition {
        column: Identifier,
        comparator: Comparator,
        value: Literal,
    }

    /// `first` combined left to right with each of `rest`. `AND` and `OR` bind
    /// equally and there is no grouping, so the chain is stored flat.
    #[derive(Debug, PartialEq)]
    struct WhereClause {
        first: Condition,
        rest: Vec<(LogicalOp, Condition)>,
    }
}

impl WhereClause {
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, cond)| cond))
    }
}

use {
    super::{error::Result, Parser},
    crate::{
        ast::InsertStmt,
        lexer::{Keyword, Token},
    },
};

impl<'a> Parser<'a> {
    pub(super) fn parse_insert(&mut self) -> Result<InsertStmt> {
        self.must_match(Token::Keyword(Keyword::INSERT))?;
        self.must_match(Token::Keyword(Keyword::INTO))?;

        let table = self.parse_identifier()?;
        let columns = match self.try_match(Token::LeftParen) {
            Some(_) => {
                let columns = self.parse_column_list()?;
                self.must_match(Token::RightParen)?;
                Some(columns)
            }
            None => None,
        };

        self.must_match(Token::Keyword(Keyword::VALUES))?;
        let values = self.parse_comma_separated_within_parentheses(Self::parse_literal)?;
        self.must_match(Token::Semicolon)?;

        Ok(InsertStmt {
            table,
            columns,
            values,
        })
    }
}

use {
    super::{common::match_token, error::Result, Parser},
    crate::{
        ast::{ShowTarget, Statement},
        lexer::{Keyword, Token},
    },
};

impl<'a> Parser<'a> {
    pub(super) fn parse_use(&mut self) -> Result<Statement> {
        self.must_match(Token::Keyword(Keyword::USE))?;

        let database = self.parse_identifier()?;
        self.must_match(Token::Semicolon)?;

        Ok(Statement::Use { database })
    }

    pub(super) fn parse_show(&mut self) -> Result<Statement> {
        self.must_match(Token::Keyword(Keyword::SHOW))?;

        let target = match_token!(self, "DATABASES or TABLES", {
            (Token::Keyword(Keyword::DATABASES), _) => ShowTarget::Databases,
            (Token::Keyword(Keyword::TABLES), _) => ShowTarget::Tables,
        });
        self.must_match(Token::Semicolon)?;

        Ok(Statement::Show(target))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::Error};

    #[test]
    fn show() {
        assert_eq!(
            Parser::parse("show databases; SHOW Tables;").unwrap(),
            vec![
                Statement::Show(ShowTarget::Databases),
                Statement::Show(ShowTarget::Tables)
            ]
        );

        assert!(matches!(
            Parser::parse("SHOW DATABASE;"),
            Err(Error::Syntax { expected, .. }) if expected == "DATABASES or TABLES"
        ));
    }
}

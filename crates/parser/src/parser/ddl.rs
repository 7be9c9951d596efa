use {
    super::{common::match_token, error::Result, Parser},
    crate::{
        ast::{ColumnDefinition, CreateTableStmt, Statement},
        lexer::{Keyword, Token},
    },
};

impl<'a> Parser<'a> {
    pub(super) fn parse_create_database(&mut self) -> Result<Statement> {
        self.must_match(Token::Keyword(Keyword::CREATE))?;
        self.must_match(Token::Keyword(Keyword::DATABASE))?;

        let name = self.parse_identifier()?;
        self.must_match(Token::Semicolon)?;

        Ok(Statement::CreateDatabase { name })
    }

    /// Column definitions may be separated by commas or just whitespace, and a
    /// trailing comma before `)` is accepted.
    pub(super) fn parse_create_table(&mut self) -> Result<Statement> {
        self.must_match(Token::Keyword(Keyword::CREATE))?;
        self.must_match(Token::Keyword(Keyword::TABLE))?;

        let name = self.parse_identifier()?;
        self.must_match(Token::LeftParen)?;

        let mut columns = vec![];
        loop {
            let name = self.parse_identifier()?;
            let data_type = self.parse_data_type()?;
            columns.push(ColumnDefinition { name, data_type });

            self.try_match(Token::Comma);
            if self.try_match(Token::RightParen).is_some() {
                break;
            }
        }

        self.must_match(Token::Semicolon)?;

        Ok(Statement::CreateTable(CreateTableStmt { name, columns }))
    }

    pub(super) fn parse_drop(&mut self) -> Result<Statement> {
        self.must_match(Token::Keyword(Keyword::DROP))?;

        let stmt = match_token!(self, "DATABASE or TABLE", {
            (Token::Keyword(Keyword::DATABASE), _) =>
                Statement::DropDatabase { name: self.parse_identifier()? },
            (Token::Keyword(Keyword::TABLE), _) =>
                Statement::DropTable { name: self.parse_identifier()? },
        });
        self.must_match(Token::Semicolon)?;

        Ok(stmt)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{ast::identifier_from_str, Error},
        def::DataType,
    };

    fn column(name: &str, data_type: DataType) -> ColumnDefinition {
        ColumnDefinition {
            name: identifier_from_str(name),
            data_type,
        }
    }

    #[test]
    fn create_table_separators() {
        for sql in [
            "CREATE TABLE t (id int, name varchar);",
            "CREATE TABLE t (id INT name VARCHAR);",
            "CREATE TABLE t (id int, name varchar,);",
        ] {
            assert_eq!(
                Parser::parse(sql).unwrap(),
                vec![Statement::CreateTable(CreateTableStmt {
                    name: identifier_from_str("t"),
                    columns: vec![column("id", DataType::Int), column("name", DataType::Varchar)],
                })]
            );
        }
    }

    #[test]
    fn create_table_requires_a_column() {
        let output = Parser::new("CREATE TABLE t ();").collect::<Vec<_>>();

        assert!(matches!(
            &output[0],
            Err(Error::Syntax { expected, found, .. }) if expected == "identifier" && found == ")"
        ));
    }

    #[test]
    fn create_table_unknown_type() {
        let output = Parser::new("CREATE TABLE t (id integer);").collect::<Vec<_>>();

        assert_eq!(
            output,
            vec![Err(Error::Syntax {
                expected: "data type".to_string(),
                found: "integer".to_string(),
                position: 19,
            })]
        );
    }

    #[test]
    fn drop() {
        assert_eq!(
            Parser::parse("DROP DATABASE a; drop table b;").unwrap(),
            vec![
                Statement::DropDatabase {
                    name: identifier_from_str("a")
                },
                Statement::DropTable {
                    name: identifier_from_str("b")
                },
            ]
        );
    }
}

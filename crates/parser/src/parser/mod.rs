mod common;
mod ddl;
mod error;
mod insert;
mod query;
mod utility;

pub use self::error::{Error, Result};

use {
    self::common::match_token,
    crate::{
        ast::Statement,
        lexer::{Keyword, Lexer, Token},
    },
    ::common::iter::{Lookahead, LookaheadExt},
};

/// `CREATE` needs to see the token after it before committing to a production.
const LOOKAHEAD: usize = 2;

/// Parses statements one at a time. A failed statement is skipped up to its
/// terminating `;` and parsing resumes with the next one.
pub struct Parser<'a> {
    src: &'a str,
    tokens: Lookahead<Lexer<'a>, LOOKAHEAD>,
    at_boundary: bool,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).lookahead(),
            at_boundary: true,
        }
    }

    /// Parses every statement of `sql`, stopping at the first error.
    pub fn parse(sql: &'a str) -> Result<Vec<Statement>> {
        Self::new(sql).collect()
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.peek_token(0) {
            Some(Token::Keyword(Keyword::CREATE)) => match self.peek_token(1) {
                Some(Token::Keyword(Keyword::DATABASE)) => self.parse_create_database(),
                Some(Token::Keyword(Keyword::TABLE)) => self.parse_create_table(),
                _ => {
                    self.advance();
                    match_token!(self, "DATABASE or TABLE", {})
                }
            },
            Some(Token::Keyword(Keyword::DROP)) => self.parse_drop(),
            Some(Token::Keyword(Keyword::USE)) => self.parse_use(),
            Some(Token::Keyword(Keyword::SHOW)) => self.parse_show(),
            Some(Token::Keyword(Keyword::INSERT)) => self.parse_insert().map(Statement::Insert),
            Some(Token::Keyword(Keyword::SELECT)) => self.parse_select().map(Statement::Select),
            _ => match_token!(self, "statement", {}),
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_semicolons();
        self.tokens.peek()?;

        let result = self.parse_statement();
        if result.is_err() {
            self.recover();
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::ast::{identifier_from_str, *},
        def::DataType,
    };

    #[test]
    fn parse_script() {
        let sql = "
            CREATE DATABASE shop;
            use shop;
            create table items (id int, name varchar, price double, added date);
            SHOW TABLES;
            INSERT INTO items VALUES (1, 'pen', 1.5, 20240101);
            SELECT * FROM items WHERE id >= 1;
        ";

        let output = Parser::parse(sql).unwrap();

        assert_eq!(output.len(), 6);
        assert_eq!(
            output[0],
            Statement::CreateDatabase {
                name: identifier_from_str("shop")
            }
        );
        assert_eq!(
            output[1],
            Statement::Use {
                database: identifier_from_str("shop")
            }
        );
        assert_eq!(
            output[2],
            Statement::CreateTable(CreateTableStmt {
                name: identifier_from_str("items"),
                columns: [
                    ("id", DataType::Int),
                    ("name", DataType::Varchar),
                    ("price", DataType::Double),
                    ("added", DataType::Date),
                ]
                .into_iter()
                .map(|(name, data_type)| ColumnDefinition {
                    name: identifier_from_str(name),
                    data_type,
                })
                .collect(),
            })
        );
        assert_eq!(output[3], Statement::Show(ShowTarget::Tables));
        assert!(matches!(output[4], Statement::Insert(_)));
        assert!(matches!(output[5], Statement::Select(_)));
    }

    #[test]
    fn create_needs_database_or_table() {
        let output = Parser::new("CREATE INDEX i;").collect::<Vec<_>>();

        assert_eq!(
            output,
            vec![Err(Error::Syntax {
                expected: "DATABASE or TABLE".to_string(),
                found: "INDEX".to_string(),
                position: 7,
            })]
        );
    }

    #[test]
    fn unknown_statement() {
        let output = Parser::new("UPDATE t;").collect::<Vec<_>>();

        assert_eq!(
            output,
            vec![Err(Error::Syntax {
                expected: "statement".to_string(),
                found: "UPDATE".to_string(),
                position: 0,
            })]
        );
    }

    #[test]
    fn missing_semicolon() {
        let output = Parser::new("SHOW DATABASES").collect::<Vec<_>>();

        assert_eq!(
            output,
            vec![Err(Error::Syntax {
                expected: "`;`".to_string(),
                found: "end of input".to_string(),
                position: 14,
            })]
        );
    }

    #[test]
    fn recovers_after_error() {
        let sql = "SELECT FROM t; SHOW DATABASES; USE 42; USE db;";
        let output = Parser::new(sql).collect::<Vec<_>>();

        assert_eq!(output.len(), 4);
        assert!(matches!(&output[0], Err(Error::Syntax { found, .. }) if found == "FROM"));
        assert_eq!(output[1], Ok(Statement::Show(ShowTarget::Databases)));
        // the error is raised at the `42`, the rest up to `;` is skipped
        assert!(matches!(&output[2], Err(Error::Syntax { found, .. }) if found == "42"));
        assert_eq!(
            output[3],
            Ok(Statement::Use {
                database: identifier_from_str("db")
            })
        );
    }

    #[test]
    fn recovers_when_error_is_at_semicolon() {
        let output = Parser::new("USE ; SHOW TABLES;").collect::<Vec<_>>();

        assert!(matches!(&output[0], Err(Error::Syntax { found, .. }) if found == ";"));
        assert_eq!(output[1], Ok(Statement::Show(ShowTarget::Tables)));
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn lexing_error() {
        let output = Parser::new("SELECT @ FROM t; SHOW TABLES;").collect::<Vec<_>>();

        assert_eq!(
            output[0],
            Err(Error::Lexing {
                source: crate::lexer::Error::UnexpectedChar { c: '@', position: 7 }
            })
        );
        assert_eq!(output[1], Ok(Statement::Show(ShowTarget::Tables)));
    }

    #[test]
    fn empty_statements_are_skipped() {
        assert_eq!(Parser::parse(" ;; ; ").unwrap(), vec![]);
    }
}

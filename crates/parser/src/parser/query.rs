use {
    super::{common::match_token, error::Result, Parser},
    crate::{
        ast::{Columns, Comparator, Condition, LogicalOp, SelectStmt, WhereClause},
        lexer::{Keyword, Token},
    },
};

impl<'a> Parser<'a> {
    pub(super) fn parse_select(&mut self) -> Result<SelectStmt> {
        self.must_match(Token::Keyword(Keyword::SELECT))?;

        let columns = self.parse_column_list()?;
        self.must_match(Token::Keyword(Keyword::FROM))?;
        let table = self.parse_identifier()?;
        let filter = self.parse_where_clause()?;
        self.must_match(Token::Semicolon)?;

        Ok(SelectStmt {
            columns,
            table,
            filter,
        })
    }

    pub(super) fn parse_column_list(&mut self) -> Result<Columns> {
        if self.try_match(Token::Asterisk).is_some() {
            return Ok(Columns::Wildcard);
        }

        Ok(Columns::Named(
            self.parse_comma_separated(Self::parse_identifier)?,
        ))
    }

    fn parse_where_clause(&mut self) -> Result<Option<WhereClause>> {
        if !self.try_match_keyword(Keyword::WHERE) {
            return Ok(None);
        }

        let first = self.parse_condition()?;
        let mut rest = vec![];

        while let Some(op) = self.try_match_logical_op() {
            rest.push((op, self.parse_condition()?));
        }

        Ok(Some(WhereClause { first, rest }))
    }

    fn try_match_logical_op(&mut self) -> Option<LogicalOp> {
        if self.try_match_keyword(Keyword::AND) {
            Some(LogicalOp::And)
        } else if self.try_match_keyword(Keyword::OR) {
            Some(LogicalOp::Or)
        } else {
            None
        }
    }

    fn parse_condition(&mut self) -> Result<Condition> {
        let column = self.parse_identifier()?;
        let comparator = match_token!(self, "comparison operator", {
            (Token::Equal, _) => Comparator::Equal,
            (Token::GreaterThan, _) => Comparator::GreaterThan,
            (Token::LessThan, _) => Comparator::LessThan,
            (Token::GreaterThanOrEqual, _) => Comparator::GreaterThanOrEqual,
            (Token::LessThanOrEqual, _) => Comparator::LessThanOrEqual,
        });
        let value = self.parse_literal()?;

        Ok(Condition {
            column,
            comparator,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            ast::{identifier_from_str, Literal, Statement},
            Error,
        },
    };

    fn condition(column: &str, comparator: Comparator, value: Literal) -> Condition {
        Condition {
            column: identifier_from_str(column),
            comparator,
            value,
        }
    }

    #[test]
    fn it_works() {
        let input = "SELECT a, b FROM abc WHERE a > 1 AND b = 'x' OR a <= 2.5;";
        let expected_output = vec![Statement::Select(SelectStmt {
            columns: Columns::Named(vec![identifier_from_str("a"), identifier_from_str("b")]),
            table: identifier_from_str("abc"),
            filter: Some(WhereClause {
                first: condition("a", Comparator::GreaterThan, Literal::Number("1".into())),
                rest: vec![
                    (
                        LogicalOp::And,
                        condition("b", Comparator::Equal, Literal::String("x".into())),
                    ),
                    (
                        LogicalOp::Or,
                        condition(
                            "a",
                            Comparator::LessThanOrEqual,
                            Literal::Number("2.5".into()),
                        ),
                    ),
                ],
            }),
        })];

        let output = Parser::parse(input).unwrap();

        assert_eq!(output, expected_output);
    }

    #[test]
    fn wildcard_and_duplicates() {
        let output = Parser::parse("SELECT * FROM t; SELECT a, a FROM t;").unwrap();

        assert_eq!(
            output,
            vec![
                Statement::Select(SelectStmt {
                    columns: Columns::Wildcard,
                    table: identifier_from_str("t"),
                    filter: None,
                }),
                Statement::Select(SelectStmt {
                    columns: Columns::Named(vec![
                        identifier_from_str("a"),
                        identifier_from_str("a")
                    ]),
                    table: identifier_from_str("t"),
                    filter: None,
                }),
            ]
        );
    }

    #[test]
    fn long_chain_is_flat() {
        let conditions = (0..1000)
            .map(|i| format!("c = {}", i))
            .collect::<Vec<_>>()
            .join(" OR ");
        let sql = format!("SELECT * FROM t WHERE {};", conditions);

        let output = Parser::parse(&sql).unwrap();

        match &output[0] {
            Statement::Select(SelectStmt {
                filter: Some(clause),
                ..
            }) => assert_eq!(clause.conditions().count(), 1000),
            other => panic!("unexpected statement {:?}", other),
        }
    }

    #[test]
    fn condition_errors() {
        let output =
            Parser::new("SELECT * FROM t WHERE a != 1; SELECT * FROM t WHERE a = b;")
                .collect::<Vec<_>>();

        assert!(matches!(
            &output[0],
            Err(Error::Lexing { .. })
        ));
        assert!(matches!(
            &output[1],
            Err(Error::Syntax { expected, found, .. }) if expected == "number or string" && found == "b"
        ));
    }

    #[test]
    fn wildcard_stands_alone() {
        assert!(matches!(
            Parser::parse("SELECT *, a FROM t;"),
            Err(Error::Syntax { expected, found, .. }) if expected == "FROM" && found == ","
        ));
    }
}

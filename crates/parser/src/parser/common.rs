use {
    super::{
        error::{Error, Result, SyntaxSnafu},
        Parser,
    },
    crate::{
        ast::{Identifier, Literal},
        common::{Span, Spanned},
        lexer::{self, truncate_lexeme, Keyword, Token},
    },
    def::DataType,
    std::fmt::Display,
};

/// Consumes the next token and dispatches on it; anything the arms do not
/// match becomes a syntax error naming `$expected`.
macro_rules! match_token {
    ( $parser:expr, $expected:expr, { $( $($t:pat_param)|* $(if $cond:expr)? => $e:expr, )* } ) => {
        match $parser.advance() {
            $( $( Some(Ok($t)) )|* $(if $cond)? => $e,)*

            Some(Ok((_, span))) => return Err($parser.unexpected($expected, span)),
            Some(Err(e)) => return Err($parser.lexing_error(e)),
            None => return Err($parser.unexpected_end($expected)),
        }
    };
}

pub(super) use match_token;

impl<'a> Parser<'a> {
    /// Consumes one token, remembering whether it closed a statement.
    pub(super) fn advance(&mut self) -> Option<lexer::Result<Spanned<Token>>> {
        let item = self.tokens.next();
        self.at_boundary = matches!(item, Some(Ok((Token::Semicolon, _))));
        item
    }

    pub(super) fn peek_token(&mut self, n: usize) -> Option<Token> {
        match self.tokens.peek_nth(n) {
            Some(Ok((token, _))) => Some(*token),
            _ => None,
        }
    }

    pub(super) fn lexeme(&self, span: Span) -> String {
        truncate_lexeme(&self.src[span]).to_string()
    }

    /// The content between the quotes of a string token.
    pub(super) fn string_content(&self, span: Span) -> String {
        truncate_lexeme(&self.src[*span.start() + 1..*span.end()]).to_string()
    }

    pub(super) fn identifier_from_span(&self, span: Span) -> Identifier {
        Identifier(self.lexeme(span.clone()), span)
    }

    pub(super) fn unexpected(&self, expected: impl Display, span: Span) -> Error {
        SyntaxSnafu {
            expected: expected.to_string(),
            found: self.lexeme(span.clone()),
            position: *span.start(),
        }
        .build()
    }

    pub(super) fn unexpected_end(&self, expected: impl Display) -> Error {
        SyntaxSnafu {
            expected: expected.to_string(),
            found: "end of input",
            position: self.src.len(),
        }
        .build()
    }

    pub(super) fn skip_semicolons(&mut self) {
        while self
            .tokens
            .next_if(|token| matches!(token, Ok((Token::Semicolon, _))))
            .is_some()
        {}
    }

    /// Skips the rest of a failed statement, up to and including its `;`.
    pub(super) fn recover(&mut self) {
        while !self.at_boundary && self.advance().is_some() {}
    }

    pub(super) fn must_match(&mut self, token: Token) -> Result<Span> {
        match_token!(self, token, {
            (t, span) if t == token => Ok(span),
        })
    }

    pub(super) fn try_match(&mut self, token: Token) -> Option<Span> {
        match self
            .tokens
            .next_if(|item| matches!(item, Ok((t, _)) if *t == token))
        {
            Some(Ok((_, span))) => Some(span),
            _ => None,
        }
    }

    pub(super) fn try_match_keyword(&mut self, keyword: Keyword) -> bool {
        self.try_match(Token::Keyword(keyword)).is_some()
    }

    pub(super) fn parse_identifier(&mut self) -> Result<Identifier> {
        match_token!(self, Token::Identifier, {
            (Token::Identifier, span) => Ok(self.identifier_from_span(span)),
        })
    }

    pub(super) fn parse_literal(&mut self) -> Result<Literal> {
        match_token!(self, "number or string", {
            (Token::Number, span) => Ok(Literal::Number(self.lexeme(span))),
            (Token::String, span) => Ok(Literal::String(self.string_content(span))),
        })
    }

    pub(super) fn parse_data_type(&mut self) -> Result<DataType> {
        match_token!(self, "data type", {
            (Token::Keyword(Keyword::INT), _) => Ok(DataType::Int),
            (Token::Keyword(Keyword::VARCHAR), _) => Ok(DataType::Varchar),
            (Token::Keyword(Keyword::DOUBLE), _) => Ok(DataType::Double),
            (Token::Keyword(Keyword::DATE), _) => Ok(DataType::Date),
        })
    }

    pub(super) fn parse_comma_separated<T, F>(&mut self, mut func: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let mut v = vec![func(self)?];

        while self.try_match(Token::Comma).is_some() {
            v.push(func(self)?);
        }

        Ok(v)
    }

    pub(super) fn parse_comma_separated_within_parentheses<T, F>(
        &mut self,
        func: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        self.must_match(Token::LeftParen)?;
        let v = self.parse_comma_separated(func)?;
        self.must_match(Token::RightParen)?;

        Ok(v)
    }

    pub(super) fn lexing_error(&self, source: lexer::Error) -> Error {
        Error::Lexing { source }
    }
}

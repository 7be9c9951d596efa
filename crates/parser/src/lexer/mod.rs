mod error;
mod token;

pub use self::{
    error::{Error, Result},
    token::{Keyword, Token},
};

use {
    self::error::{UnexpectedCharSnafu, UnterminatedStringSnafu},
    crate::common::Spanned,
    std::{iter::Peekable, str::CharIndices},
};

/// Lexemes handed to the parser are cut to this many bytes.
pub const MAX_LEXEME_LEN: usize = 63;

/// Scans `src` on demand. The sequence ends (`None`) when the input is exhausted;
/// an error consumes the offending input, so scanning may continue after it.
pub struct Lexer<'a> {
    src: &'a str,
    iter: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        // consume whitespace
        self.consume_while(char::is_whitespace);

        let &(begin, c) = self.iter.peek()?;

        Some(match c {
            '\'' | '"' => self.scan_string(begin, c),
            c if c.is_ascii_digit() => Ok(self.scan_number(begin)),
            c if c.is_ascii_alphabetic() => Ok(self.scan_identifier(begin)),
            c => self.scan_symbol(begin, c),
        })
    }
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().peekable(),
        }
    }

    fn consume_while(&mut self, func: impl Fn(char) -> bool) {
        while self.iter.next_if(|&(_, c)| func(c)).is_some() {}
    }

    /// Byte offset of the next unconsumed char.
    fn offset(&mut self) -> usize {
        self.iter.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn span_from(&mut self, begin: usize) -> crate::Span {
        begin..=self.offset() - 1
    }

    fn scan_string(&mut self, begin: usize, quote: char) -> Result<Spanned<Token>> {
        self.iter.next();

        for (i, c) in self.iter.by_ref() {
            if c == quote {
                return Ok((Token::String, begin..=i));
            }
        }

        UnterminatedStringSnafu {
            span: begin..=self.src.len() - 1,
        }
        .fail()
    }

    fn scan_number(&mut self, begin: usize) -> Spanned<Token> {
        self.consume_while(|c| c.is_ascii_digit());

        if self.iter.next_if(|&(_, c)| c == '.').is_some() {
            self.consume_while(|c| c.is_ascii_digit());
        }

        (Token::Number, self.span_from(begin))
    }

    fn scan_identifier(&mut self, begin: usize) -> Spanned<Token> {
        self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let span = self.span_from(begin);
        let token = Keyword::lookup(&self.src[span.clone()])
            .map(Token::Keyword)
            .unwrap_or(Token::Identifier);

        (token, span)
    }

    fn scan_symbol(&mut self, begin: usize, c: char) -> Result<Spanned<Token>> {
        self.iter.next();

        let token = match c {
            '*' => Token::Asterisk,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '=' => Token::Equal,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '>' => match self.iter.next_if(|&(_, c)| c == '=') {
                Some(_) => Token::GreaterThanOrEqual,
                None => Token::GreaterThan,
            },
            '<' => match self.iter.next_if(|&(_, c)| c == '=') {
                Some(_) => Token::LessThanOrEqual,
                None => Token::LessThan,
            },
            c => return UnexpectedCharSnafu { c, position: begin }.fail(),
        };

        Ok((token, self.span_from(begin)))
    }
}

/// Cuts `s` to at most [`MAX_LEXEME_LEN`] bytes without splitting a char.
pub(crate) fn truncate_lexeme(s: &str) -> &str {
    let mut end = s.len().min(MAX_LEXEME_LEN);
    while !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use {super::*, std::iter::zip};

    fn test(input: &str, expected_output: &[Result<Spanned<Token>>]) {
        let output = Lexer::new(input).collect::<Vec<_>>();

        assert_eq!(output, expected_output);
    }

    /// Every whitespace-separated word of `input` is expected to be one token.
    fn make_test(input: &str, tokens: Vec<Token>) {
        let strs = input.split_whitespace().collect::<Vec<_>>();
        assert_eq!(strs.len(), tokens.len());

        let mut from = 0;
        let expected_output = zip(strs, tokens)
            .map(|(s, token)| {
                let begin = from + input[from..].find(s).unwrap();
                from = begin + s.len();

                Ok((token, begin..=begin + s.len() - 1))
            })
            .collect::<Vec<_>>();

        test(input, &expected_output);
    }

    #[test]
    fn scan_string() {
        let input = " 'abc'  \"x y\"  'it\"s' ";
        let output = Lexer::new(input).collect::<Vec<_>>();

        assert_eq!(
            output,
            [
                Ok((Token::String, 1..=5)),
                Ok((Token::String, 8..=12)),
                Ok((Token::String, 15..=20)),
            ]
        );
    }

    #[test]
    fn scan_string_error() {
        test(
            "'abc",
            &[Err(Error::UnterminatedString { span: 0..=3 })],
        );
        // the rest of the input is swallowed by the open string
        test(
            "'a; SELECT",
            &[Err(Error::UnterminatedString { span: 0..=9 })],
        );
    }

    #[test]
    fn scan_number() {
        make_test(
            "12 123. 123.456 0",
            vec![Token::Number, Token::Number, Token::Number, Token::Number],
        );

        // only one decimal point belongs to a number
        let output = Lexer::new("1.2.3").collect::<Vec<_>>();
        assert_eq!(output[0], Ok((Token::Number, 0..=2)));
        assert_eq!(output[1], Err(Error::UnexpectedChar { c: '.', position: 3 }));
        assert_eq!(output[2], Ok((Token::Number, 4..=4)));
    }

    #[test]
    fn scan_identifier() {
        make_test(
            " SELECT abc FROM Def_1 wHeRe",
            vec![
                Token::Keyword(Keyword::SELECT),
                Token::Identifier,
                Token::Keyword(Keyword::FROM),
                Token::Identifier,
                Token::Keyword(Keyword::WHERE),
            ],
        );
    }

    #[test]
    fn scan_data_type_keywords() {
        make_test(
            "int varchar double date databases tables drop",
            vec![
                Token::Keyword(Keyword::INT),
                Token::Keyword(Keyword::VARCHAR),
                Token::Keyword(Keyword::DOUBLE),
                Token::Keyword(Keyword::DATE),
                Token::Keyword(Keyword::DATABASES),
                Token::Keyword(Keyword::TABLES),
                Token::Keyword(Keyword::DROP),
            ],
        );
    }

    #[test]
    fn scan_symbol() {
        make_test(
            "* , ; = ( ) > < >= <=",
            vec![
                Token::Asterisk,
                Token::Comma,
                Token::Semicolon,
                Token::Equal,
                Token::LeftParen,
                Token::RightParen,
                Token::GreaterThan,
                Token::LessThan,
                Token::GreaterThanOrEqual,
                Token::LessThanOrEqual,
            ],
        );
    }

    #[test]
    fn unexpected_char_is_consumed() {
        test(
            "a @ b",
            &[
                Ok((Token::Identifier, 0..=0)),
                Err(Error::UnexpectedChar { c: '@', position: 2 }),
                Ok((Token::Identifier, 4..=4)),
            ],
        );

        let err = Lexer::new("a @ b").nth(1).unwrap().unwrap_err();
        assert_eq!(err.to_string(), "unexpected char `@` at position 2");
    }

    #[test]
    fn adjacent_tokens() {
        test(
            "id>=10;",
            &[
                Ok((Token::Identifier, 0..=1)),
                Ok((Token::GreaterThanOrEqual, 2..=3)),
                Ok((Token::Number, 4..=5)),
                Ok((Token::Semicolon, 6..=6)),
            ],
        );
    }

    #[test]
    fn truncate() {
        let long = "a".repeat(100);
        assert_eq!(truncate_lexeme(&long).len(), MAX_LEXEME_LEN);
        assert_eq!(truncate_lexeme("short"), "short");

        // a two-byte char straddling the limit is dropped whole
        let s = format!("{}é", "a".repeat(62));
        assert_eq!(truncate_lexeme(&s), "a".repeat(62));
    }
}

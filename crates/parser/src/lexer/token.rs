use std::fmt::Display;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Keyword(Keyword),

    Identifier,

    Number,
    String,

    Asterisk,
    Comma,
    Semicolon,
    LeftParen,
    RightParen,

    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => write!(f, "{}", keyword),
            Self::Identifier => f.write_str("identifier"),
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Asterisk => f.write_str("`*`"),
            Self::Comma => f.write_str("`,`"),
            Self::Semicolon => f.write_str("`;`"),
            Self::LeftParen => f.write_str("`(`"),
            Self::RightParen => f.write_str("`)`"),
            Self::Equal => f.write_str("`=`"),
            Self::GreaterThan => f.write_str("`>`"),
            Self::GreaterThanOrEqual => f.write_str("`>=`"),
            Self::LessThan => f.write_str("`<`"),
            Self::LessThanOrEqual => f.write_str("`<=`"),
        }
    }
}

macro_rules! keyword {
    ( $( $var:ident, )* ) => {
        #[derive(Debug, PartialEq, Clone, Copy)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        pub enum Keyword {
            $($var,)*
        }

        impl Keyword {
            /// Matches case-insensitively.
            pub fn lookup(s: &str) -> Option<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($var) => Some(Self::$var),)*
                    _ => None,
                }
            }
        }

        impl Display for Keyword {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                match self {
                    $(Self::$var => f.write_str(stringify!($var)),)*
                }
            }
        }
    };
}

keyword! {
    AND,
    CREATE,
    DATABASE,
    DATABASES,
    DATE,
    DOUBLE,
    DROP,
    FROM,
    INSERT,
    INT,
    INTO,
    OR,
    SELECT,
    SHOW,
    TABLE,
    TABLES,
    USE,
    VALUES,
    VARCHAR,
    WHERE,
}

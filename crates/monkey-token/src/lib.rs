#![forbid(unsafe_code)]

pub mod token {
    use serde::Serialize;
    use std::fmt;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum TokenKind {
        // sentinels
        Illegal,
        Eof,
        // identifiers / literals
        Ident,
        Int,
        // operators
        Assign,
        Plus,
        Minus,
        Bang,
        Star,
        Slash,
        Lt,
        Gt,
        Eq,
        Neq,
        // delimiters
        Comma,
        Semicolon,
        LParen,
        RParen,
        LBrace,
        RBrace,
        // keywords
        Function,
        Let,
        True,
        False,
        If,
        Else,
        Return,
    }

    impl TokenKind {
        /// Canonical display string: punctuation for operators and
        /// delimiters, upper-case names for everything else.
        pub const fn as_str(self) -> &'static str {
            match self {
                TokenKind::Illegal => "ILLEGAL",
                TokenKind::Eof => "EOF",
                TokenKind::Ident => "IDENT",
                TokenKind::Int => "INT",
                TokenKind::Assign => "=",
                TokenKind::Plus => "+",
                TokenKind::Minus => "-",
                TokenKind::Bang => "!",
                TokenKind::Star => "*",
                TokenKind::Slash => "/",
                TokenKind::Lt => "<",
                TokenKind::Gt => ">",
                TokenKind::Eq => "==",
                TokenKind::Neq => "!=",
                TokenKind::Comma => ",",
                TokenKind::Semicolon => ";",
                TokenKind::LParen => "(",
                TokenKind::RParen => ")",
                TokenKind::LBrace => "{",
                TokenKind::RBrace => "}",
                TokenKind::Function => "FUNCTION",
                TokenKind::Let => "LET",
                TokenKind::True => "TRUE",
                TokenKind::False => "FALSE",
                TokenKind::If => "IF",
                TokenKind::Else => "ELSE",
                TokenKind::Return => "RETURN",
            }
        }

        pub fn is_keyword(self) -> bool {
            matches!(
                self,
                TokenKind::Function
                    | TokenKind::Let
                    | TokenKind::True
                    | TokenKind::False
                    | TokenKind::If
                    | TokenKind::Else
                    | TokenKind::Return
            )
        }
    }

    impl fmt::Display for TokenKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize)]
    pub struct Token {
        pub kind: TokenKind,
        /// Source text that produced the token (empty for EOF).
        pub literal: String,
    }

    impl Token {
        pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
            Self {
                kind,
                literal: literal.into(),
            }
        }

        /// One-character token. Bytes >= 0x80 map to the code point of the same value.
        pub fn from_byte(kind: TokenKind, b: u8) -> Self {
            Self {
                kind,
                literal: char::from(b).to_string(),
            }
        }

        pub fn eof() -> Self {
            Self::new(TokenKind::Eof, "")
        }

        pub fn is_eof(&self) -> bool {
            self.kind == TokenKind::Eof
        }
    }

    impl fmt::Display for Token {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}({:?})", self.kind, self.literal)
        }
    }
}

pub mod keywords {
    use super::token::TokenKind;

    pub const KEYWORDS: [(&str, TokenKind); 7] = [
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ];

    /// Resolves an identifier to its reserved kind, or `Ident`.
    pub fn lookup_ident(ident: &str) -> TokenKind {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == ident)
            .map(|&(_, kind)| kind)
            .unwrap_or(TokenKind::Ident)
    }
}

pub use keywords::{lookup_ident, KEYWORDS};
pub use token::{Token, TokenKind};

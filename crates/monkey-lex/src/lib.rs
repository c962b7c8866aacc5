#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

mod lexer;

pub use lexer::{tokenize, Lexer};
pub use monkey_token::{lookup_ident, Token, TokenKind};

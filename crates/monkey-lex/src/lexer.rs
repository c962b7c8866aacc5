use monkey_token::{lookup_ident, Token, TokenKind};

/// Byte-oriented scanner over borrowed source bytes.
///
/// `ch` always mirrors `src.get(pos)`; `None` marks end of input, so a literal
/// NUL byte in the source is an ordinary (illegal) byte rather than the end.
/// The source need not be valid UTF-8: any byte >= 0x80 lexes as ILLEGAL.
pub struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
    read_pos: usize,
    ch: Option<u8>,
    // set once the iterator has handed out EOF
    drained: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    pub fn from_bytes(src: &'a [u8]) -> Self {
        Self {
            src,
            pos: 0,
            read_pos: 1,
            ch: src.first().copied(),
            drained: false,
        }
    }

    /// Moves the cursor one byte forward. Saturates at end of input.
    fn advance(&mut self) {
        if self.ch.is_none() {
            return;
        }
        self.pos = self.read_pos;
        self.read_pos += 1;
        self.ch = self.src.get(self.pos).copied();
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.read_pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.advance();
        }
    }

    fn read_while(&mut self, pred: fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while matches!(self.ch, Some(b) if pred(b)) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    fn read_identifier(&mut self) -> &'a [u8] {
        self.read_while(is_ident_byte)
    }

    fn read_number(&mut self) -> &'a [u8] {
        self.read_while(|b| b.is_ascii_digit())
    }

    /// Returns the next token. Once the input is exhausted every call yields EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(b) = self.ch else {
            return Token::eof();
        };

        // 2-char operators first
        if (b == b'=' || b == b'!') && self.peek() == Some(b'=') {
            let kind = if b == b'=' {
                TokenKind::Eq
            } else {
                TokenKind::Neq
            };
            let start = self.pos;
            self.advance();
            self.advance();
            return Token::new(kind, ascii_literal(&self.src[start..self.pos]));
        }

        let single = match b {
            b'=' => Some(TokenKind::Assign),
            b'!' => Some(TokenKind::Bang),
            b';' => Some(TokenKind::Semicolon),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b',' => Some(TokenKind::Comma),
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'/' => Some(TokenKind::Slash),
            b'*' => Some(TokenKind::Star),
            b'<' => Some(TokenKind::Lt),
            b'>' => Some(TokenKind::Gt),
            b'{' => Some(TokenKind::LBrace),
            b'}' => Some(TokenKind::RBrace),
            _ => None,
        };
        if let Some(kind) = single {
            self.advance();
            return Token::from_byte(kind, b);
        }

        // readers leave the cursor on the byte after the token; no extra advance
        if is_ident_byte(b) {
            let ident = ascii_literal(self.read_identifier());
            return Token::new(lookup_ident(&ident), ident);
        }
        if b.is_ascii_digit() {
            return Token::new(TokenKind::Int, ascii_literal(self.read_number()));
        }

        self.advance();
        Token::from_byte(TokenKind::Illegal, b)
    }
}

/// Yields each token up to and including the first EOF, then stops.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.drained {
            return None;
        }
        let tok = self.next_token();
        self.drained = tok.is_eof();
        Some(tok)
    }
}

/// Lexes the whole input. The result always ends with a single EOF token.
pub fn tokenize(input: impl AsRef<[u8]>) -> Vec<Token> {
    Lexer::from_bytes(input.as_ref()).collect()
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

// only called on runs of ASCII bytes
fn ascii_literal(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

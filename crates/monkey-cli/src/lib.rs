//! Token dump helpers behind the `monkey-cli` binary.

use anyhow::{bail, Context, Result};
use monkey_token::{Token, TokenKind};
use serde::Serialize;

/// Maximum source file size in bytes (1MB)
pub const MAX_SOURCE_SIZE: usize = 1_000_000;

/// Reads the raw bytes of a source file; invalid UTF-8 is left to the lexer.
pub fn load_source(path: &str) -> Result<Vec<u8>> {
    let src = std::fs::read(path).with_context(|| format!("failed to read '{}'", path))?;
    if src.len() > MAX_SOURCE_SIZE {
        bail!(
            "source file exceeds {}MB limit ({} bytes)",
            MAX_SOURCE_SIZE / 1_000_000,
            src.len()
        );
    }
    Ok(src)
}

#[derive(Debug, Serialize)]
pub struct LexReport<'a> {
    pub file: &'a str,
    pub illegal: usize,
    pub tokens: &'a [Token],
}

impl<'a> LexReport<'a> {
    pub fn new(file: &'a str, tokens: &'a [Token]) -> Self {
        let illegal = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Illegal)
            .count();
        Self {
            file,
            illegal,
            tokens,
        }
    }
}

/// One `KIND<TAB>literal` line per token.
pub fn render_pretty(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        out.push_str(tok.kind.as_str());
        out.push('\t');
        out.push_str(&tok.literal);
        out.push('\n');
    }
    out
}

pub fn render_json(report: &LexReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Fails on the first ILLEGAL token.
pub fn check_strict(tokens: &[Token]) -> Result<()> {
    if let Some((idx, tok)) = tokens
        .iter()
        .enumerate()
        .find(|(_, t)| t.kind == TokenKind::Illegal)
    {
        bail!("illegal character {:?} at token {}", tok.literal, idx);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_lex::tokenize;

    #[test]
    fn pretty_uses_display_strings() {
        let out = render_pretty(&tokenize("let x = 1 == 2;"));
        assert_eq!(
            out,
            "LET\tlet\nIDENT\tx\n=\t=\nINT\t1\n==\t==\nINT\t2\n;\t;\nEOF\t\n"
        );
    }

    #[test]
    fn json_report_counts_illegal_tokens() {
        let toks = tokenize("a @ #");
        let report = LexReport::new("<mem>", &toks);
        assert_eq!(report.illegal, 2);
        let v: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(v["file"], "<mem>");
        assert_eq!(v["illegal"], 2);
        assert_eq!(v["tokens"][0]["kind"], "IDENT");
        assert_eq!(v["tokens"][1]["literal"], "@");
        assert_eq!(v["tokens"][3]["kind"], "EOF");
    }

    #[test]
    fn strict_reports_first_illegal() {
        assert!(check_strict(&tokenize("let a = 1;")).is_ok());
        let err = check_strict(&tokenize("a ? b @")).unwrap_err().to_string();
        assert!(err.contains("\"?\""), "{err}");
        assert!(err.contains("token 1"), "{err}");
    }

    #[test]
    fn load_source_keeps_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.monkey");
        std::fs::write(&path, b"x \xE9").unwrap();
        let src = load_source(path.to_str().unwrap()).unwrap();
        assert_eq!(src, b"x \xE9");
        let toks = tokenize(&src);
        assert_eq!(toks[1], Token::from_byte(TokenKind::Illegal, 0xE9));
        assert_eq!(LexReport::new("latin1.monkey", &toks).illegal, 1);
    }

    #[test]
    fn load_source_rejects_missing_file() {
        let err = load_source("/definitely/not/here.monkey")
            .unwrap_err()
            .to_string();
        assert!(err.contains("failed to read"), "{err}");
    }
}

//! Logos-based lexer for the route-list text format.
//!
//! One route group per line: an origin, an arrow `->`, and one or more
//! comma-separated destinations. `//` starts a comment that runs to the end
//! of the line.
//!
//! # Example input
//!
//! ```text
//! // europe
//! DEL -> DOH, CDG
//! CDG -> BUD, SIN
//! SIN -> CDG
//! ```

use alloc::vec::Vec;
use core::ops::Range;

/// All token kinds produced by the route-list lexer.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(::logos::Logos, Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A line comment starting with `//` and running to end of line.
    #[regex(r"//[^\n]*", allow_greedy = true)]
    Comment,

    /// Route arrow `->`.
    #[token("->")]
    Arrow,

    /// Destination separator `,`.
    #[token(",")]
    Comma,

    /// A vertex label: letters, digits, or underscores.
    #[regex(r"[a-zA-Z0-9_]+")]
    Ident,

    /// A newline (`\n` or `\r\n`).
    #[regex(r"\r?\n")]
    Newline,

    /// Spaces or tabs. Emitted so the tokenizer can be used for syntax
    /// highlighting where whitespace positioning matters.
    #[regex(r"[ \t]+")]
    Whitespace,
}

/// A single token with its kind and the byte-offset span in the source.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range `start..end` into the original input string.
    pub span: Range<usize>,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Return the source text for this token given the original input.
    #[must_use]
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

/// Tokenize `input` and return all valid tokens.
///
/// Tokens that the lexer cannot recognise are silently skipped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    use logos::Logos as _;
    TokenKind::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|kind| Token { kind, span }))
        .collect()
}

/// Tokenize `input` and return tokens paired with their source text slices.
#[must_use]
pub fn tokenize_with_text(input: &str) -> Vec<(Token, &str)> {
    tokenize(input)
        .into_iter()
        .map(|token| {
            let text = token.text(input);
            (token, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{tokenize, tokenize_with_text, TokenKind};

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_single_route() {
        assert_eq!(
            kinds("DSM -> ORD\n"),
            [
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::Arrow,
                TokenKind::Whitespace,
                TokenKind::Ident,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_destination_list() {
        let ks = kinds("CDG->BUD,SIN");
        assert_eq!(
            ks,
            [
                TokenKind::Ident,
                TokenKind::Arrow,
                TokenKind::Ident,
                TokenKind::Comma,
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let pairs = tokenize_with_text("// hubs -> spokes\nA -> B");
        assert_eq!(pairs[0].0.kind, TokenKind::Comment);
        assert_eq!(pairs[0].1, "// hubs -> spokes");
        assert_eq!(pairs[1].0.kind, TokenKind::Newline);
    }

    #[test]
    fn test_numeric_labels_are_idents() {
        let ks = kinds("0 -> 17");
        assert_eq!(ks[0], TokenKind::Ident);
        assert_eq!(ks[4], TokenKind::Ident);
    }

    #[test]
    fn test_span_correctness() {
        let input = "AB->C";
        let tokens = tokenize(input);
        assert_eq!(tokens[0].span, 0..2);
        assert_eq!(tokens[1].span, 2..4);
        assert_eq!(tokens[2].span, 4..5);
        assert_eq!(tokens[2].text(input), "C");
    }

    #[test]
    fn test_crlf_newline() {
        let ks = kinds("A -> B\r\n");
        assert_eq!(ks.last(), Some(&TokenKind::Newline));
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        let ks = kinds("A => B");
        assert!(!ks.contains(&TokenKind::Arrow));
        assert_eq!(ks.iter().filter(|k| **k == TokenKind::Ident).count(), 2);
    }
}

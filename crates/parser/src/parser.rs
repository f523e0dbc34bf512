//! Winnow-based parser for the route-list text format.
//!
//! Grammar:
//! ```text
//! routes      = line* EOF
//! line        = WS? route? WS? comment? (NEWLINE | EOF)
//! route       = ident WS? "->" WS? ident (WS? "," WS? ident)*
//! comment     = "//" REST_OF_LINE
//! ident       = [A-Za-z0-9_]+
//! ```
//!
//! A route line `A -> B, C` yields the edges `(A, B)` and `(A, C)`, in that
//! order.

use hubreach_core::DiGraph;
use winnow::ascii::{line_ending, till_line_ending};
use winnow::combinator::{alt, eof, opt, separated};
use winnow::prelude::*;
use winnow::token::{literal, take_while};
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// A parse error with human-readable location information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// One physical line of a route-list file.
///
/// A blank line has neither a route nor a comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLine {
    /// The origin and its destinations, in written order.
    pub route: Option<(String, Vec<String>)>,
    /// The comment text including its leading `//`, trailing whitespace
    /// removed.
    pub comment: Option<String>,
}

/// Parse a route list into `(origin, destination)` pairs in file order.
///
/// # Errors
///
/// Returns a [`ParseError`] with line/column information when the input does
/// not conform to the grammar.
pub fn parse_routes(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    run(routes_parser, input)
}

/// Parse a route list line by line, keeping comments and blank lines.
///
/// # Errors
///
/// Same as [`parse_routes`].
pub fn parse_lines(input: &str) -> Result<Vec<SourceLine>, ParseError> {
    run(lines_parser, input)
}

/// Parse a route list straight into a graph.
///
/// # Errors
///
/// Same as [`parse_routes`].
pub fn parse_graph(input: &str) -> Result<DiGraph<String>, ParseError> {
    parse_routes(input).map(|routes| routes.into_iter().collect())
}

/// Rewrite a route-list file in canonical layout.
///
/// Every line keeps its place. Route lines become `ORIGIN -> D1, D2`, a
/// trailing comment is separated by one space, comment-only lines lose
/// their indentation, and trailing blank lines are dropped. Formatting the
/// output again returns it unchanged.
///
/// # Errors
///
/// Same as [`parse_routes`].
pub fn format_source(input: &str) -> Result<String, ParseError> {
    let mut lines: Vec<String> = parse_lines(input)?
        .into_iter()
        .map(|line| {
            let route = line.route.map(|(origin, destinations)| {
                format!("{origin} -> {}", destinations.join(", "))
            });
            match (route, line.comment) {
                (Some(route), Some(comment)) => format!("{route} {comment}"),
                (Some(route), None) => route,
                (None, Some(comment)) => comment,
                (None, None) => String::new(),
            }
        })
        .collect();
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}

fn run<O>(
    mut parser: impl FnMut(&mut &str) -> ModalResult<O>,
    input: &str,
) -> Result<O, ParseError> {
    let mut stream: &str = input;
    parser(&mut stream).map_err(|e| {
        let consumed = input.len().saturating_sub(stream.len());
        let (line, column) = offset_to_line_col(input, consumed);
        let mut message = e.to_string();
        if message.trim().is_empty() {
            message = "expected `ORIGIN -> DESTINATION[, DESTINATION...]`".to_string();
        }
        ParseError {
            message,
            line,
            column,
        }
    })
}

// ---------------------------------------------------------------------------
// Line/column helper
// ---------------------------------------------------------------------------

/// Convert a byte offset into the original input to 1-based (line, column).
fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let safe_offset = offset.min(input.len());
    let prefix = &input[..safe_offset];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or_else(|| prefix.len() + 1, |pos| prefix.len() - pos);
    (line, column)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// Optional inline whitespace: spaces and tabs only (no newlines).
fn opt_inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// A vertex label.
fn ident(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .map(ToString::to_string)
        .parse_next(input)
}

/// `WS? "->" WS?`
fn arrow(input: &mut &str) -> ModalResult<()> {
    (opt_inline_ws, literal("->"), opt_inline_ws)
        .void()
        .parse_next(input)
}

/// `WS? "," WS?`
fn comma(input: &mut &str) -> ModalResult<()> {
    (opt_inline_ws, literal(","), opt_inline_ws)
        .void()
        .parse_next(input)
}

/// `"//" <rest-of-line>`, newline not included.
fn comment(input: &mut &str) -> ModalResult<String> {
    (literal("//"), till_line_ending)
        .take()
        .map(|text: &str| text.trim_end().to_string())
        .parse_next(input)
}

// ---------------------------------------------------------------------------
// Line parsers
// ---------------------------------------------------------------------------

/// `ident "->" ident ("," ident)*`
fn route(input: &mut &str) -> ModalResult<(String, Vec<String>)> {
    let origin = ident.parse_next(input)?;
    arrow.parse_next(input)?;
    let destinations: Vec<String> = separated(1.., ident, comma).parse_next(input)?;
    Ok((origin, destinations))
}

/// One physical line, terminated by a newline or the end of input.
fn line(input: &mut &str) -> ModalResult<SourceLine> {
    opt_inline_ws.parse_next(input)?;
    let route = opt(route).parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    let comment = opt(comment).parse_next(input)?;
    alt((line_ending.void(), eof.void())).parse_next(input)?;
    Ok(SourceLine { route, comment })
}

fn lines_parser(input: &mut &str) -> ModalResult<Vec<SourceLine>> {
    let mut lines = Vec::new();
    while !input.is_empty() {
        lines.push(line.parse_next(input)?);
    }
    Ok(lines)
}

/// Blank and comment-only lines produce no routes.
fn routes_parser(input: &mut &str) -> ModalResult<Vec<(String, String)>> {
    Ok(lines_parser(input)?
        .into_iter()
        .filter_map(|line| line.route)
        .flat_map(|(origin, destinations)| {
            destinations
                .into_iter()
                .map(move |destination| (origin.clone(), destination))
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

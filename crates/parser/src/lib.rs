//! Parser for the route-list text format.
//!
//! ```
//! let routes = hubreach_parser::parse_routes("DSM -> ORD\nORD -> BGI, LGA\n").unwrap();
//! assert_eq!(routes.len(), 3);
//! ```

pub mod parser;

pub use hubreach_core::routes::lexer::{tokenize, tokenize_with_text, Token, TokenKind};
pub use parser::{format_source, parse_graph, parse_lines, parse_routes, ParseError, SourceLine};

pub mod display;
#[cfg(feature = "parser")]
pub mod lexer;

pub use display::{format_route_list, format_routes};

pub mod csv;

use winnow::{token::take_while, PResult, Parser};

/// Characters considered whitespace for the `ws` parser.
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

/// Parses a series of whitespace characters, returning the series as a slice.
pub fn ws<'a>(buf: &mut &'a str) -> PResult<&'a str> {
    take_while(0.., WHITESPACE).parse_next(buf)
}

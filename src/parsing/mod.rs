//! Turning generated text into deck entries.
//!
//! [`segment`] splits a response into theme and deck lines; [`parse_line`]
//! reads one deck line. Neither ever fails: unusable input simply yields
//! fewer entries.

pub mod line_parser;
pub mod segmenter;

pub use line_parser::parse_line;
pub use segmenter::{segment, Segments};

use crate::models::ParsedEntry;

/// Parse every deck line, dropping the ones that carry no card name.
pub fn parse_deck_lines<'a, I>(lines: I) -> Vec<ParsedEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(parse_line).collect()
}

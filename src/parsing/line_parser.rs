use crate::models::ParsedEntry;

/// Characters stripped from both ends of a line and of the card name.
///
/// Apostrophes are not decoration: names such as `Seekers'` end in one.
fn is_decorative(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | '-' | '*' | '"' | '“' | '”' | '•')
}

fn is_quantity_marker(c: char) -> bool {
    matches!(c, 'x' | 'X' | '×')
}

/// Parse one main-deck line into an entry.
///
/// Grammar, applied to the line with decorative characters trimmed:
///
/// ```text
/// line     := [ enum ] name [ sep marker digits ]
/// enum     := digits ( "." | ")" ) whitespace
/// marker   := "x" | "X" | "×"
/// sep      := start of line | any non-alphanumeric character
/// ```
///
/// Without a quantity suffix the count is 1. Returns `None` when the name
/// is empty after trimming, or when the suffix is `x0` or does not fit a
/// `u32`.
pub fn parse_line(line: &str) -> Option<ParsedEntry> {
    let line = strip_enumeration(line.trim_matches(is_decorative));

    let (name, count) = match split_quantity(line) {
        Some((name, digits)) => {
            let count = digits.parse::<u32>().ok().filter(|n| *n > 0)?;
            (name, count)
        }
        None => (line, 1),
    };

    let name = name.trim_matches(is_decorative);
    if name.is_empty() {
        return None;
    }
    Some(ParsedEntry::new(name, count))
}

/// Drop a leading list number such as `12. ` or `3) `.
fn strip_enumeration(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some('.' | ')'), Some(c)) if c.is_whitespace() => chars.as_str(),
        _ => line,
    }
}

/// Split a trailing `xN` suffix off `line`, returning `(rest, digits)`.
fn split_quantity(line: &str) -> Option<(&str, &str)> {
    let without_digits = line.trim_end_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() == line.len() {
        return None;
    }
    let digits = &line[without_digits.len()..];

    let mut chars = without_digits.chars();
    let marker = chars.next_back()?;
    if !is_quantity_marker(marker) {
        return None;
    }
    let rest = chars.as_str();
    match rest.chars().next_back() {
        Some(prev) if prev.is_alphanumeric() => None,
        _ => Some((rest, digits)),
    }
}

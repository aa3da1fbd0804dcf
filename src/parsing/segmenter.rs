/// The two halves of a generated response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    /// Trimmed lines before the heading, joined by `\n`.
    pub theme: String,
    /// Raw lines after the heading.
    pub deck_lines: Vec<String>,
}

const HEADING_MARKER: &str = "main deck";

/// Split `text` at the first line containing "main deck" (any case).
///
/// The heading line itself lands in neither half. Without a heading the
/// whole text is theme and there are no deck lines.
pub fn segment(text: &str) -> Segments {
    let mut theme = Vec::new();
    let mut deck_lines = Vec::new();
    let mut in_deck = false;

    for line in text.lines() {
        if in_deck {
            deck_lines.push(line.to_string());
        } else if line.to_lowercase().contains(HEADING_MARKER) {
            in_deck = true;
        } else {
            theme.push(line.trim());
        }
    }

    Segments {
        theme: theme.join("\n").trim().to_string(),
        deck_lines,
    }
}

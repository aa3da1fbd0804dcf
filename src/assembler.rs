use crate::models::DeckResult;
use crate::resolver::Resolution;

/// Folds resolution outcomes into the final [`DeckResult`].
///
/// Card totals are not checked here; a deck short of its target size
/// simply shows fewer cards.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeckAssembler;

impl DeckAssembler {
    pub fn assemble(theme: impl Into<String>, resolutions: Vec<Resolution>) -> DeckResult {
        let mut cards = Vec::new();
        let mut lines = Vec::new();
        let mut skipped = Vec::new();

        for resolution in resolutions {
            match resolution {
                Resolution::Resolved { entry, card } => {
                    lines.push(entry.decklist_line());
                    cards.push(card);
                }
                other => skipped.extend(other.to_skipped()),
            }
        }

        DeckResult {
            theme: theme.into(),
            cards,
            decklist: lines.join("\n"),
            skipped,
        }
    }
}

//! Generation prompt construction.
//!
//! The prompt pins down the structure the parser relies on: a short theme,
//! a heading containing "Main Deck", one `Name xCOUNT` line per card and an
//! exact card total for the selected game.

use crate::models::Game;

/// Builds the text sent to the generation service for one request.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    game: Game,
}

impl PromptBuilder {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> Game {
        self.game
    }

    /// Render the full prompt for `criteria`.
    pub fn build(&self, criteria: &str) -> String {
        let game = self.game.display_name();
        let size = self.game.deck_size();
        let criteria = criteria.trim();

        format!(
            "You're an expert {game} deck builder. Build a main deck based on the user's request below.\n\
             \n\
             User request: \"{criteria}\"\n\
             \n\
             Follow this format exactly:\n\
             1. Start with 2 to 4 lines describing the deck's theme and strategy.\n\
             2. Then write a line containing only the heading \"Main Deck:\".\n\
             3. Under the heading, list one card per line as \"Card Name xCOUNT\", for example \"{example} x3\".\n\
             4. The counts must add up to exactly {size} cards.\n\
             5. If the request says to include or exclude specific cards, archetypes or card types, follow it strictly.\n\
             6. Use official English card names only, without set codes, numbering or bullet points.\n\
             7. Do not write anything after the last card line.\n",
            example = self.example_card(),
        )
    }

    fn example_card(&self) -> &'static str {
        match self.game {
            Game::Yugioh => "Dark Magician",
            Game::Pokemon => "Pikachu",
        }
    }
}

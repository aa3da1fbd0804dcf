pub mod decks;
pub mod meta;

//! Card resolution tests against fake card databases.

mod common;

use common::{calls, pokemon, ygo_monster, ygo_spell, FakePokemon, FakeYugioh};
use deckgen_sdk::{CardResolver, Game, ParsedEntry, Resolution, SkipReason};

// ---------------------------------------------------------------------------
// Yu-Gi-Oh!
// ---------------------------------------------------------------------------

#[test]
fn yugioh_exact_match_resolves() {
    let ygo = FakeYugioh::default().with_card(ygo_monster("Dark Magician", 2500, 2100));
    let pkm = FakePokemon::default();
    let resolver = CardResolver::new(&ygo, &pkm);

    let res = resolver.resolve(&ParsedEntry::new("Dark Magician", 3), Game::Yugioh);
    let card = res.card().expect("resolved");
    assert_eq!(card.name, "Dark Magician");
    assert_eq!(card.count, 3);
    assert_eq!(card.attack, Some(2500));
    assert_eq!(card.defense, Some(2100));
    assert_eq!(calls(&ygo.queries), vec!["Dark Magician"]);
    assert!(calls(&pkm.queries).is_empty());
}

#[test]
fn yugioh_unknown_name_is_skipped_without_panicking() {
    let ygo = FakeYugioh::default();
    let pkm = FakePokemon::default();
    let resolver = CardResolver::new(&ygo, &pkm);

    let res = resolver.resolve(&ParsedEntry::new("Not A Real Card Name XYZ", 1), Game::Yugioh);
    assert!(!res.is_resolved());
    assert_eq!(
        res,
        Resolution::Skipped {
            entry: ParsedEntry::new("Not A Real Card Name XYZ", 1),
            reason: SkipReason::NoMatch,
        }
    );
}

#[test]
fn yugioh_lookup_error_is_skipped_and_later_entries_still_resolve() {
    let ygo = FakeYugioh::default()
        .with_card(ygo_monster("A", 1000, 1000))
        .with_broken("B")
        .with_card(ygo_spell("C"));
    let pkm = FakePokemon::default();
    let resolver = CardResolver::new(&ygo, &pkm);

    let entries = vec![
        ParsedEntry::new("A", 1),
        ParsedEntry::new("B", 2),
        ParsedEntry::new("C", 3),
    ];
    let out = resolver.resolve_all(&entries, Game::Yugioh);

    assert_eq!(out.len(), 3);
    assert!(out[0].is_resolved());
    match &out[1] {
        Resolution::Skipped { reason: SkipReason::Failed(msg), .. } => {
            assert!(msg.contains("connection reset"))
        }
        other => panic!("expected a failed lookup, got {other:?}"),
    }
    assert!(out[2].is_resolved());
    assert_eq!(calls(&ygo.queries), vec!["A", "B", "C"]);
}

#[test]
fn yugioh_spell_has_no_stats() {
    let ygo = FakeYugioh::default().with_card(ygo_spell("Pot of Greed"));
    let pkm = FakePokemon::default();
    let resolver = CardResolver::new(&ygo, &pkm);

    let res = resolver.resolve(&ParsedEntry::new("Pot of Greed", 1), Game::Yugioh);
    let card = res.card().unwrap();
    assert_eq!(card.attack, None);
    assert_eq!(card.defense, None);
}

#[test]
fn yugioh_does_not_strip_parentheses() {
    let ygo = FakeYugioh::default();
    let pkm = FakePokemon::default();
    let resolver = CardResolver::new(&ygo, &pkm);

    resolver.resolve(&ParsedEntry::new("Dark Magician (Arkana)", 1), Game::Yugioh);
    assert_eq!(calls(&ygo.queries), vec!["Dark Magician (Arkana)"]);
}

// ---------------------------------------------------------------------------
// Pokémon
// ---------------------------------------------------------------------------

#[test]
fn pokemon_primary_query_uses_cleaned_name() {
    let ygo = FakeYugioh::default();
    let pkm = FakePokemon::default().with_card(pokemon("Pikachu", "Pokémon", &["Basic"]));
    let resolver = CardResolver::new(&ygo, &pkm);

    let res = resolver.resolve(&ParsedEntry::new("Pikachu (Promo)", 2), Game::Pokemon);
    let card = res.card().expect("resolved");
    assert_eq!(card.name, "Pikachu");
    assert_eq!(card.card_type, "Basic");
    assert_eq!(card.attribute.as_deref(), Some("Pokémon"));
    assert_eq!(card.attack, None);
    assert_eq!(card.count, 2);
    assert_eq!(calls(&pkm.queries), vec!["exact:Pikachu"]);
    assert!(calls(&ygo.queries).is_empty());
}

#[test]
fn pokemon_empty_primary_retries_with_cleaned_free_text() {
    let ygo = FakeYugioh::default();
    let pkm = FakePokemon::default()
        .with_search_hit("Pikachu", pokemon("Pikachu V", "Pokémon", &["Basic", "V"]));
    let resolver = CardResolver::new(&ygo, &pkm);

    let res = resolver.resolve(&ParsedEntry::new("Pikachu (Promo)", 1), Game::Pokemon);
    assert_eq!(res.card().unwrap().name, "Pikachu V");
    assert_eq!(calls(&pkm.queries), vec!["exact:Pikachu", "search:Pikachu"]);
}

#[test]
fn pokemon_failed_primary_retries_once() {
    let ygo = FakeYugioh::default();
    let pkm = FakePokemon::default()
        .with_search_hit(
            "Basic Lightning Energy",
            pokemon("Basic Lightning Energy", "Energy", &["Basic"]),
        )
        .with_exact_broken();
    let resolver = CardResolver::new(&ygo, &pkm);

    let res = resolver.resolve(&ParsedEntry::new("Basic Lightning Energy", 10), Game::Pokemon);
    assert!(res.is_resolved());
    assert_eq!(
        calls(&pkm.queries),
        vec!["exact:Basic Lightning Energy", "search:Basic Lightning Energy"]
    );
}

#[test]
fn pokemon_gives_up_after_one_retry() {
    let ygo = FakeYugioh::default();
    let pkm = FakePokemon::default();
    let resolver = CardResolver::new(&ygo, &pkm);

    let res = resolver.resolve(&ParsedEntry::new("Missingno (Glitch)", 1), Game::Pokemon);
    assert_eq!(
        res,
        Resolution::Skipped {
            entry: ParsedEntry::new("Missingno (Glitch)", 1),
            reason: SkipReason::NoMatch,
        }
    );
    assert_eq!(calls(&pkm.queries), vec!["exact:Missingno", "search:Missingno"]);
}

#[test]
fn pokemon_retry_error_is_a_failed_skip() {
    let ygo = FakeYugioh::default();
    let pkm = FakePokemon::default().with_exact_broken().with_search_broken();
    let resolver = CardResolver::new(&ygo, &pkm);

    let res = resolver.resolve(&ParsedEntry::new("Pikachu", 1), Game::Pokemon);
    let skipped = res.to_skipped().unwrap();
    assert_eq!(skipped.name, "Pikachu");
    assert!(skipped.reason.starts_with("lookup failed"));
}

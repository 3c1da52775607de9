//! Pokédex Data Model
//!
//! Holds the canonical card list produced by a load and the pure filter
//! that derives the visible subset from it. The canonical list is replaced
//! atomically by each load; individual cards are never mutated.

use crate::api::PokemonDetail;
use serde::Serialize;

// ============================================================================
// Pokemon Card
// ============================================================================

/// The canonical display record: one card per Pokémon.
///
/// `id` is unique within a load (guaranteed upstream); `image_url` is absent
/// when the API has no default sprite for the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonCard {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<PokemonDetail> for PokemonCard {
    fn from(detail: PokemonDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            image_url: detail.sprites.front_default,
        }
    }
}

impl PokemonCard {
    /// Name with the first letter uppercased, for display
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Check whether a card name matches a query.
///
/// Case-insensitive substring; the query is matched verbatim, whitespace
/// included. Only the empty query matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Derive the visible subset of `cards` for `query`.
///
/// Output order equals input order. Linear scan over one page of cards.
pub fn filter_cards(cards: &[PokemonCard], query: &str) -> Vec<PokemonCard> {
    cards
        .iter()
        .filter(|card| name_matches(&card.name, query))
        .cloned()
        .collect()
}

// ============================================================================
// Export
// ============================================================================

/// Render cards as CSV with a header row.
/// Name and image fields are quoted; embedded quotes are doubled.
pub fn cards_to_csv(cards: &[PokemonCard]) -> String {
    let mut out = String::from("Id,Name,ImageUrl\n");
    for card in cards {
        let name = card.name.replace('"', "\"\"");
        let url = card
            .image_url
            .as_deref()
            .unwrap_or("")
            .replace('"', "\"\"");
        out.push_str(&format!("{},\"{}\",\"{}\"\n", card.id, name, url));
    }
    out
}

// ============================================================================
// Generations
// ============================================================================

/// Region label for the generation a national-dex id belongs to
pub fn generation_label(id: u32) -> &'static str {
    match id {
        1..=151 => "Kanto",
        152..=251 => "Johto",
        252..=386 => "Hoenn",
        387..=493 => "Sinnoh",
        494..=649 => "Unova",
        650..=721 => "Kalos",
        722..=809 => "Alola",
        810..=905 => "Galar",
        906..=1025 => "Paldea",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, name: &str) -> PokemonCard {
        PokemonCard {
            id,
            name: name.to_string(),
            image_url: Some(format!("https://img.example/{id}.png")),
        }
    }

    fn starters() -> Vec<PokemonCard> {
        vec![
            card(1, "bulbasaur"),
            card(4, "charmander"),
            card(5, "charmeleon"),
            card(7, "squirtle"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let cards = starters();
        assert_eq!(filter_cards(&cards, ""), cards);
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let cards = starters();
        // No name contains a space, so these must match nothing
        assert!(filter_cards(&cards, " ").is_empty());
        assert!(filter_cards(&cards, "char ").is_empty());
        assert!(!name_matches("charmander", " "));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let cards = starters();
        let visible = filter_cards(&cards, "CHAR");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "charmander");
        assert_eq!(visible[1].name, "charmeleon");
    }

    #[test]
    fn no_false_positives() {
        let cards = starters();
        for matched in filter_cards(&cards, "squir") {
            assert!(matched.name.contains("squir"));
        }
        assert!(filter_cards(&cards, "mewtwo").is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let cards = starters();
        let visible = filter_cards(&cards, "a");
        let positions: Vec<u32> = visible.iter().map(|c| c.id).collect();
        let mut sorted = positions.clone();
        sorted.sort_by_key(|id| cards.iter().position(|c| c.id == *id));
        assert_eq!(positions, sorted);
    }

    #[test]
    fn filter_is_idempotent() {
        let cards = starters();
        let once = filter_cards(&cards, "char");
        let twice = filter_cards(&once, "char");
        assert_eq!(once, twice);
    }

    #[test]
    fn card_from_detail_keeps_sprite_option() {
        let detail: crate::api::PokemonDetail = serde_json::from_str(
            r#"{"id": 1, "name": "bulbasaur", "sprites": {"front_default": "img.png"}}"#,
        )
        .unwrap();
        let card = PokemonCard::from(detail);
        assert_eq!(
            card,
            PokemonCard {
                id: 1,
                name: "bulbasaur".to_string(),
                image_url: Some("img.png".to_string()),
            }
        );
    }

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(card(1, "bulbasaur").display_name(), "Bulbasaur");
        assert_eq!(card(2, "").display_name(), "");
    }

    #[test]
    fn csv_doubles_embedded_quotes() {
        let cards = vec![PokemonCard {
            id: 83,
            name: "farfetch'd \"wild\"".to_string(),
            image_url: None,
        }];
        let csv = cards_to_csv(&cards);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Id,Name,ImageUrl"));
        assert_eq!(lines.next(), Some(r#"83,"farfetch'd ""wild""","""#));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn generation_labels() {
        assert_eq!(generation_label(1), "Kanto");
        assert_eq!(generation_label(151), "Kanto");
        assert_eq!(generation_label(152), "Johto");
        assert_eq!(generation_label(906), "Paldea");
        assert_eq!(generation_label(5000), "Unknown");
    }
}

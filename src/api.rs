//! PokéAPI Wire Types
//!
//! Deserialization targets for the two endpoints DexGrid consumes:
//! the paged collection listing and the per-Pokémon detail resource.
//! Unknown fields are ignored; only the fields we display are modeled.

use serde::Deserialize;

/// Default collection endpoint base
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// One page of the collection listing (`GET {base}/pokemon?limit=N`)
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryPage {
    pub results: Vec<PokemonSummary>,
}

/// A single listing entry. Transient: only `url` is used, to issue the
/// follow-up detail request.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

/// Detail resource for one Pokémon (`GET {summary.url}`)
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
}

/// Sprite URLs. `front_default` is null for some entries; that is legal
/// and surfaces as a card without an image.
#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

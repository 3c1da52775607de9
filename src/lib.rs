//! DexGrid - Searchable Pokédex card grid for the terminal
//!
//! Fetches one page of Pokémon from PokéAPI, enriches every entry with a
//! concurrent detail request, and renders the resulting cards in a grid
//! with a live substring filter.
//!
//! # Features
//!
//! - **One-shot Load**: collection page plus per-entry detail fan-out,
//!   joined all-or-nothing
//! - **Live Filter**: case-insensitive substring search over card names
//! - **Terminal Grid**: ratatui card browser with keyboard navigation
//! - **Export**: dump the fetched cards as JSON or CSV
//!
//! # Example
//!
//! ```no_run
//! use dexgrid::{filter_cards, LoadConfig, PokedexLoader};
//!
//! fn main() -> dexgrid::Result<()> {
//!     let loader = PokedexLoader::new().with_config(LoadConfig::default());
//!     let cards = loader.load_blocking()?;
//!
//!     for card in filter_cards(&cards, "char") {
//!         println!("#{:04} {}", card.id, card.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod loader;
pub mod logging;
pub mod pokedex;
pub mod tui;

// Re-export main types
pub use error::{DexGridError, Result};
pub use loader::{LoadConfig, PokedexLoader};
pub use pokedex::{cards_to_csv, filter_cards, generation_label, PokemonCard};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

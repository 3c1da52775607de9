use crate::pokedex::generation_label;
use ratatui::style::Color;

/// Accent color for the generation a dex id belongs to
pub fn color_for_generation(id: u32) -> Color {
    match generation_label(id) {
        "Kanto" => Color::Red,
        "Johto" => Color::Yellow,
        "Hoenn" => Color::Green,
        "Sinnoh" => Color::Cyan,
        "Unova" => Color::Gray,
        "Kalos" => Color::Magenta,
        "Alola" => Color::LightYellow,
        "Galar" => Color::LightMagenta,
        "Paldea" => Color::LightRed,
        _ => Color::White,
    }
}

/// One-line sprite indicator for a card body
pub fn sprite_marker(has_sprite: bool) -> &'static str {
    if has_sprite {
        "\u{1F5BC}\u{FE0F} sprite"
    } else {
        "no sprite"
    }
}

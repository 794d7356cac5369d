//! Embed colours.

pub const RARE: u32 = 0x3498db;
pub const EPIC: u32 = 0x9b59b6;
pub const LEGENDARY: u32 = 0xf1c40f;
pub const MYTHIC: u32 = 0xe74c3c;
/// Rarities we have no colour for.
pub const UNKNOWN_RARITY: u32 = 0xffffff;

pub const HELP: u32 = 0x0d48a6;
pub const TAROT: u32 = 0x00ff00;

/// Colour for a rarity tag, case-insensitive.
///
/// ```
/// use dionysus_commands::palette::{rarity_color, EPIC, UNKNOWN_RARITY};
///
/// assert_eq!(rarity_color("Epic"), EPIC);
/// assert_eq!(rarity_color("secret"), UNKNOWN_RARITY);
/// ```
pub fn rarity_color(rarity: &str) -> u32 {
    match rarity.trim().to_lowercase().as_str() {
        "rare" => RARE,
        "epic" => EPIC,
        "legendary" => LEGENDARY,
        "mythical" | "mythic" => MYTHIC,
        _ => UNKNOWN_RARITY,
    }
}

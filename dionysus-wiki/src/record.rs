pub const DEFAULT_DISPLAY_NAME: &str = "Unknown Character";
pub const NO_PARAGRAPH: &str = "Error: No paragraph found.";
pub const NO_CONTENT: &str = "Error: Content not found.";
pub const UNABLE_TO_FETCH: &str = "Error: Unable to fetch the information.";
pub const NO_ABILITY_INFO: &str = "No ability information found.";
pub const DEFAULT_RARITY: &str = "rare";

/// Everything the bot shows about one character page.
///
/// Built fresh per lookup; missing fields already carry their fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub display_name: String,
    pub description: String,
    pub ability_info: String,
    /// Lower-cased, e.g. `"epic"`.
    pub rarity: String,
    /// Only set when the first bold text opens with `"`.
    pub quote: Option<String>,
    pub image_url: Option<String>,
}

impl CharacterRecord {
    /// Stand-in shown when the page could not be fetched at all.
    pub fn unavailable() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            description: UNABLE_TO_FETCH.to_string(),
            ability_info: NO_ABILITY_INFO.to_string(),
            rarity: DEFAULT_RARITY.to_string(),
            quote: None,
            image_url: None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.description == UNABLE_TO_FETCH && self.display_name == DEFAULT_DISPLAY_NAME
    }
}

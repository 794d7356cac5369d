use crate::palette::rarity_color;
use crate::reply::{Embed, Reply};
use dionysus_common::DionysusError;
use dionysus_wiki::{CharacterRecord, WikiClient};

pub const FOOTER_TEXT: &str = "Anime Crossover Defense Web Scraper powered by Dionysus Bot.";
pub const FOOTER_ICON: &str =
    "https://static.wikia.nocookie.net/fbtd/images/e/e6/Site-logo.png/revision/latest?cb=20240711144854";
pub const ABILITY_FIELD_NAME: &str = "``Ability Information``";

pub fn usage(prefix: &str) -> String {
    format!("Please provide a character name. Usage: `{prefix}acd {{character_name}}`")
}

/// Embed for one character: colour from rarity, optional quote, then abilities.
pub fn character_embed(record: &CharacterRecord) -> Embed {
    let mut embed = Embed::new(rarity_color(&record.rarity))
        .title(&record.display_name)
        .description(&record.description)
        .footer(FOOTER_TEXT, Some(FOOTER_ICON.to_string()));
    if let Some(url) = &record.image_url {
        embed = embed.image(url);
    }
    if let Some(quote) = &record.quote {
        embed = embed.field("", format!("*{quote}*"), false);
    }
    embed.field(ABILITY_FIELD_NAME, &record.ability_info, true)
}

/// Look `name` up on the wiki. Fetch failures still produce an embed, built
/// from the placeholder record.
pub async fn character_info(wiki: &WikiClient, name: Option<&str>, prefix: &str) -> Reply {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return Reply::Text(usage(prefix));
    };
    let record = match wiki.lookup(name).await {
        Ok(record) => record,
        Err(e) => {
            let err = DionysusError::from(e);
            if err.is_not_found() {
                tracing::info!(target: "commands", %name, error = %err, "commands.character.not_found");
            } else {
                tracing::warn!(target: "commands", %name, error = %err, "commands.character.unavailable");
            }
            CharacterRecord::unavailable()
        }
    };
    Reply::Embed(character_embed(&record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::reply::BLANK_NAME;

    fn record() -> CharacterRecord {
        CharacterRecord {
            display_name: "Gojo".into(),
            description: "Strongest sorcerer.".into(),
            ability_info: "```Blue:``` *pulls*".into(),
            rarity: "epic".into(),
            quote: Some("\"Throughout heaven and earth\"".into()),
            image_url: Some("https://img.example/gojo.png".into()),
        }
    }

    #[test]
    fn embed_layout_matches_record() {
        let embed = character_embed(&record());
        assert_eq!(embed.title.as_deref(), Some("Gojo"));
        assert_eq!(embed.description.as_deref(), Some("Strongest sorcerer."));
        assert_eq!(embed.color, palette::EPIC);
        assert_eq!(embed.image_url.as_deref(), Some("https://img.example/gojo.png"));
        assert_eq!(embed.footer.as_ref().unwrap().text, FOOTER_TEXT);

        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[0].name, BLANK_NAME);
        assert_eq!(embed.fields[0].value, "*\"Throughout heaven and earth\"*");
        assert!(!embed.fields[0].inline);
        assert_eq!(embed.fields[1].name, ABILITY_FIELD_NAME);
        assert!(embed.fields[1].inline);
    }

    #[test]
    fn no_quote_no_image() {
        let mut r = record();
        r.quote = None;
        r.image_url = None;
        let embed = character_embed(&r);
        assert_eq!(embed.fields.len(), 1);
        assert!(embed.image_url.is_none());
    }

    #[test]
    fn unavailable_record_renders_defaults() {
        let embed = character_embed(&CharacterRecord::unavailable());
        assert_eq!(embed.title.as_deref(), Some("Unknown Character"));
        assert_eq!(embed.color, palette::RARE);
        assert_eq!(embed.fields[0].value, "No ability information found.");
    }
}

use crate::palette;
use crate::reply::Embed;

pub const AUTHOR: &str = "Commands List";
pub const FOOTER: &str = "Brought to you by Overjoy061";

/// Command overview. Icons come from the chat context when it has them.
pub fn help_embed(prefix: &str, guild_icon: Option<String>, bot_avatar: Option<String>) -> Embed {
    Embed::new(palette::HELP)
        .author(AUTHOR, guild_icon)
        .field(
            "Anime Crossover Defense",
            format!("`{prefix}acd {{character_name}}` - searches up information about the character in Anime Crossover Defense."),
            false,
        )
        .field(
            "YouTube",
            format!("`{prefix}rv {{youtube_channel}}` - RandomVideo or rv for short, chooses a random video from the chosen YouTube channel."),
            false,
        )
        .field(
            "Tarot",
            format!("`{prefix}tarot` - Draws a random tarot card and provides its meaning."),
            false,
        )
        .footer(FOOTER, bot_avatar)
}

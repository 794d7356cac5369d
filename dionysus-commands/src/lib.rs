//! Command handlers for the Dionysus bot.
//!
//! Handlers return a platform-neutral [`Reply`]; `dionysus-app` turns it into
//! a Discord message and the terminal runner prints it.
//!
//! - [`character`]: wiki lookup rendered as an embed
//! - [`video`]: random upload from a YouTube channel
//! - [`tarot`]: one card from the major arcana
//! - [`help`]: command overview
//! - [`parse_command`] + [`dispatch`]: text in, reply out
pub mod character;
pub mod command;
pub mod help;
pub mod palette;
pub mod reply;
pub mod tarot;
pub mod video;

use dionysus_video::VideoSearch;
use dionysus_wiki::WikiClient;
use rand::Rng;
use std::sync::Arc;

pub use command::{parse_command, Command};
pub use reply::{Embed, EmbedField, Reply};

/// Shared, read-only collaborators for every command.
#[derive(Clone)]
pub struct Services {
    pub wiki: WikiClient,
    pub videos: Arc<dyn VideoSearch>,
    pub prefix: String,
}

impl Services {
    pub fn new(wiki: WikiClient, videos: Arc<dyn VideoSearch>, prefix: impl Into<String>) -> Self {
        Self {
            wiki,
            videos,
            prefix: prefix.into(),
        }
    }
}

/// Run one parsed command to completion.
pub async fn dispatch<R>(services: &Services, command: Command, rng: &mut R) -> Reply
where
    R: Rng + Send + ?Sized,
{
    tracing::info!(target: "commands", ?command, "commands.dispatch");
    match command {
        Command::CharacterInfo(name) => {
            character::character_info(&services.wiki, name.as_deref(), &services.prefix).await
        }
        Command::RandomVideo(channel) => {
            video::random_video(
                services.videos.as_ref(),
                channel.as_deref(),
                &services.prefix,
                rng,
            )
            .await
        }
        Command::Help => Reply::Embed(help::help_embed(&services.prefix, None, None)),
        Command::Tarot => Reply::Embed(tarot::tarot_embed(tarot::draw(rng))),
        Command::Unknown(text) => Reply::Text(format!(
            "Unknown command `{text}`. Try `{}commands`.",
            services.prefix
        )),
    }
}

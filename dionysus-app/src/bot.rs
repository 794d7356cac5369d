//! Discord front end: poise prefix commands over [`dionysus_commands`].
use anyhow::Result;
use dionysus_commands::{character, help, tarot, video, Embed, Reply, Services};
use poise::serenity_prelude as serenity;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Data {
    pub services: Services,
}

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![acd(), rv(), commands_list(), tarot_card()]
}

/// Look up a character on the Anime Crossover Defense wiki.
#[poise::command(prefix_command, aliases("animecrossoverdefense", "character-info"))]
async fn acd(ctx: Context<'_>, #[rest] character_name: Option<String>) -> Result<(), Error> {
    let services = &ctx.data().services;
    let reply = character::character_info(
        &services.wiki,
        character_name.as_deref(),
        &services.prefix,
    )
    .await;
    send(ctx, reply).await
}

/// Pick a random recent upload from a YouTube channel.
#[poise::command(
    prefix_command,
    aliases("randomvideo", "randomvid", "rvid", "random-video")
)]
async fn rv(ctx: Context<'_>, #[rest] youtube_channel: Option<String>) -> Result<(), Error> {
    let services = &ctx.data().services;
    let mut rng = StdRng::from_entropy();
    let reply = video::random_video(
        services.videos.as_ref(),
        youtube_channel.as_deref(),
        &services.prefix,
        &mut rng,
    )
    .await;
    send(ctx, reply).await
}

/// Show the command list.
#[poise::command(prefix_command, rename = "commands", aliases("cmds", "cmd", "help"))]
async fn commands_list(ctx: Context<'_>) -> Result<(), Error> {
    let guild_icon = ctx.guild().and_then(|g| g.icon_url());
    let bot_avatar = ctx.cache().current_user().avatar_url();
    let embed = help::help_embed(&ctx.data().services.prefix, guild_icon, bot_avatar);
    send(ctx, Reply::Embed(embed)).await
}

/// Draw one card from the major arcana.
#[poise::command(prefix_command, rename = "tarot", aliases("tarot-draw"))]
async fn tarot_card(ctx: Context<'_>) -> Result<(), Error> {
    let card = tarot::draw(&mut StdRng::from_entropy());
    send(ctx, Reply::Embed(tarot::tarot_embed(card))).await
}

async fn send(ctx: Context<'_>, reply: Reply) -> Result<(), Error> {
    match reply {
        Reply::Text(text) => {
            ctx.say(text).await?;
        }
        Reply::Embed(embed) => {
            ctx.send(poise::CreateReply::default().embed(to_serenity(&embed)))
                .await?;
        }
    }
    Ok(())
}

fn to_serenity(embed: &Embed) -> serenity::CreateEmbed {
    let mut out = serenity::CreateEmbed::new().colour(embed.color);
    if let Some(title) = &embed.title {
        out = out.title(title);
    }
    if let Some(description) = &embed.description {
        out = out.description(description);
    }
    if let Some(url) = &embed.image_url {
        out = out.image(url);
    }
    if let Some(author) = &embed.author {
        let mut line = serenity::CreateEmbedAuthor::new(&author.text);
        if let Some(icon) = &author.icon_url {
            line = line.icon_url(icon);
        }
        out = out.author(line);
    }
    if let Some(footer) = &embed.footer {
        let mut line = serenity::CreateEmbedFooter::new(&footer.text);
        if let Some(icon) = &footer.icon_url {
            line = line.icon_url(icon);
        }
        out = out.footer(line);
    }
    out.fields(
        embed
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone(), f.inline)),
    )
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(target: "app", command = %ctx.command().name, error = %error, "bot.command.error");
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!(target: "app", error = %e, "bot.error_handler.failed");
            }
        }
    }
}

/// Connect to the gateway and serve prefix commands until the client stops.
pub async fn run(token: &str, services: Services) -> Result<()> {
    let prefix = services.prefix.clone();
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                tracing::info!(target: "app", user = %ready.user.name, guilds = ready.guilds.len(), "bot.ready");
                Ok(Data { services })
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::MESSAGE_CONTENT;
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;
    client.start().await?;
    Ok(())
}

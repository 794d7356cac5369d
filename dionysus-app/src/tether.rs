use anyhow::{Context, Result};
use dionysus_commands::Services;
use dionysus_config::DionysusConfig;
use dionysus_video::YouTubeApi;
use dionysus_wiki::WikiClient;
use std::sync::Arc;
use std::time::Duration;

/// Wire the wiki and video clients described by `cfg` into [`Services`].
pub fn build_from_config(cfg: &DionysusConfig) -> Result<Services> {
    let mut wiki = WikiClient::new(&cfg.wiki.endpoint)
        .with_context(|| format!("invalid wiki endpoint {}", cfg.wiki.endpoint))?;
    if let Some(secs) = cfg.wiki.timeout_secs {
        wiki = wiki.with_timeout(Duration::from_secs(secs));
    }

    let youtube = YouTubeApi::with_endpoint(&cfg.youtube.endpoint, cfg.youtube.api_key.clone())
        .with_context(|| format!("invalid YouTube endpoint {}", cfg.youtube.endpoint))?
        .with_page_size(cfg.page_size());

    tracing::info!(
        target: "app",
        wiki = %cfg.wiki.endpoint,
        youtube = %cfg.youtube.endpoint,
        page_size = youtube.page_size(),
        prefix = %cfg.discord.prefix,
        "app.services.ready"
    );

    Ok(Services::new(wiki, Arc::new(youtube), cfg.discord.prefix.clone()))
}

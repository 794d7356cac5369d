use crate::reply::Reply;
use dionysus_video::{watch_url, VideoSearch};
use rand::seq::SliceRandom;
use rand::Rng;

pub const CHANNEL_NOT_FOUND: &str =
    "Couldn't find the channel. Please check the channel name and try again.";
pub const NO_VIDEOS: &str = "Couldn't find any videos for this channel.";

pub fn usage(prefix: &str) -> String {
    format!("Please provide a YouTube channel name. Usage: `{prefix}rv {{youtube_channel}}`")
}

/// Pick a random recent upload from the named channel.
///
/// Without a channel name no request is made.
pub async fn random_video<R>(
    videos: &dyn VideoSearch,
    channel_name: Option<&str>,
    prefix: &str,
    rng: &mut R,
) -> Reply
where
    R: Rng + Send + ?Sized,
{
    let Some(channel_name) = channel_name.map(str::trim).filter(|n| !n.is_empty()) else {
        return Reply::Text(usage(prefix));
    };

    let Some(channel_id) = videos.channel_id(channel_name).await else {
        return Reply::Text(CHANNEL_NOT_FOUND.to_string());
    };

    let ids = videos.recent_video_ids(&channel_id).await;
    let Some(video_id) = ids.choose(rng) else {
        return Reply::Text(NO_VIDEOS.to_string());
    };

    tracing::debug!(target: "commands", %channel_name, %channel_id, %video_id, pool = ids.len(), "commands.video.picked");
    Reply::Text(format!(
        "Here's a random video from {channel_name}: {}",
        watch_url(video_id)
    ))
}

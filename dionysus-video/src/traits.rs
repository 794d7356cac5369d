use async_trait::async_trait;
use dionysus_http::HttpError;

pub const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

#[derive(thiserror::Error, Debug)]
pub enum VideoError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<VideoError> for dionysus_common::DionysusError {
    fn from(err: VideoError) -> Self {
        match err {
            VideoError::NotFound(what) => Self::NotFound(what),
            VideoError::Config(msg) => Self::Config(msg),
            VideoError::Http(e) => Self::Fetch(e.to_string()),
        }
    }
}

/// Lookups backing the random-video command.
///
/// Both calls swallow their own failures: a broken request and an empty
/// result look the same to the caller, and the implementation logs the
/// difference.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Channel id of the best match for `channel_name`.
    async fn channel_id(&self, channel_name: &str) -> Option<String>;

    /// Most recent uploads of `channel_id`, newest first, capped at the
    /// implementation's page size.
    async fn recent_video_ids(&self, channel_id: &str) -> Vec<String>;
}

/// Canonical watch URL for a video id.
///
/// ```
/// assert_eq!(
///     dionysus_video::watch_url("dQw4w9WgXcQ"),
///     "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
/// );
/// ```
pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_BASE}{video_id}")
}

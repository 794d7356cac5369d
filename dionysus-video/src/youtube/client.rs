//! Minimal wrapper around the YouTube Data API v3 `search` endpoint.
//!
//! The API key travels as the `key` query parameter, which the HTTP client
//! redacts from every log line.
use super::types::SearchListResponse;
use crate::traits::{VideoError, VideoSearch};
use async_trait::async_trait;
use dionysus_common::DionysusError;
use dionysus_http::{Auth, HttpClient, RequestOpts};
use std::borrow::Cow;
use std::time::Instant;

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/";
/// `maxResults` ceiling enforced by the API.
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Clone)]
pub struct YouTubeApi {
    http: HttpClient,
    api_key: String,
    page_size: u32,
}

impl YouTubeApi {
    pub fn new(api_key: String) -> Result<Self, VideoError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Point the client at another base URL (tests, proxies). A trailing
    /// slash is added so relative paths keep the `/youtube/v3` prefix.
    pub fn with_endpoint(endpoint: &str, api_key: String) -> Result<Self, VideoError> {
        if api_key.trim().is_empty() {
            return Err(VideoError::Config("YouTube API key is empty".into()));
        }
        let base = if endpoint.ends_with('/') {
            Cow::Borrowed(endpoint)
        } else {
            Cow::Owned(format!("{endpoint}/"))
        };
        let http = HttpClient::new(&base)?;
        Ok(Self {
            http,
            api_key,
            page_size: MAX_PAGE_SIZE,
        })
    }

    /// Number of uploads fetched per channel, clamped to `1..=50`.
    pub fn with_page_size(mut self, n: u32) -> Self {
        self.page_size = n.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn search(
        &self,
        op: &'static str,
        params: Vec<(&str, Cow<'_, str>)>,
    ) -> Result<SearchListResponse, VideoError> {
        let started = Instant::now();
        tracing::debug!(target: "video.youtube", op, "youtube.search.start");

        let result = self
            .http
            .get_json::<SearchListResponse>(
                "search",
                RequestOpts {
                    auth: Some(Auth::Query {
                        name: "key",
                        value: Cow::Borrowed(&self.api_key),
                    }),
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Ok(resp) => {
                tracing::debug!(
                    target: "video.youtube",
                    op,
                    items = resp.items.len(),
                    total_results = ?resp.page_info.as_ref().and_then(|p| p.total_results),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "youtube.search.success"
                );
                Ok(resp)
            }
            Err(e) => {
                tracing::warn!(
                    target: "video.youtube",
                    op,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "youtube.search.error"
                );
                Err(e.into())
            }
        }
    }

    /// First channel matching `channel_name`.
    pub async fn find_channel(&self, channel_name: &str) -> Result<String, VideoError> {
        let params = vec![
            ("part", Cow::Borrowed("snippet")),
            ("q", Cow::Borrowed(channel_name)),
            ("type", Cow::Borrowed("channel")),
            ("maxResults", Cow::Borrowed("1")),
        ];
        let resp = self.search("channel", params).await?;
        resp.items
            .iter()
            .find_map(|item| item.channel_id())
            .map(str::to_string)
            .ok_or_else(|| VideoError::NotFound(format!("channel `{channel_name}`")))
    }

    /// Latest uploads of `channel_id`, ordered by date.
    pub async fn list_uploads(&self, channel_id: &str) -> Result<Vec<String>, VideoError> {
        let params = vec![
            ("part", Cow::Borrowed("snippet")),
            ("channelId", Cow::Borrowed(channel_id)),
            ("maxResults", Cow::Owned(self.page_size.to_string())),
            ("type", Cow::Borrowed("video")),
            ("order", Cow::Borrowed("date")),
        ];
        let resp = self.search("videos", params).await?;
        let ids: Vec<String> = resp
            .items
            .iter()
            .filter_map(|item| item.video_id())
            .map(str::to_string)
            .collect();
        if ids.is_empty() {
            return Err(VideoError::NotFound(format!("videos for `{channel_id}`")));
        }
        Ok(ids)
    }
}

/// Not-found outcomes are expected user input; anything else is a fault.
fn log_lookup_failure(op: &'static str, err: VideoError) {
    let err = DionysusError::from(err);
    if err.is_not_found() {
        tracing::info!(target: "video.youtube", op, error = %err, "youtube.lookup.not_found");
    } else {
        tracing::warn!(target: "video.youtube", op, error = %err, "youtube.lookup.error");
    }
}

#[async_trait]
impl VideoSearch for YouTubeApi {
    async fn channel_id(&self, channel_name: &str) -> Option<String> {
        self.find_channel(channel_name)
            .await
            .map_err(|e| log_lookup_failure("channel", e))
            .ok()
    }

    async fn recent_video_ids(&self, channel_id: &str) -> Vec<String> {
        self.list_uploads(channel_id)
            .await
            .unwrap_or_else(|e| {
                log_lookup_failure("videos", e);
                Vec::new()
            })
    }
}

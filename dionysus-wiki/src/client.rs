//! Page fetcher for the character wiki.
//!
//! One GET per lookup, no retries, no caching. The slug is appended to
//! `<endpoint>/wiki/`.
use crate::aliases::canonical_slug;
use crate::extract::extract_character;
use crate::record::CharacterRecord;
use dionysus_http::{HttpClient, HttpError, RequestOpts};
use std::time::{Duration, Instant};

pub const DEFAULT_ENDPOINT: &str = "https://acd.fandom.com";

#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("wiki page `{0}` does not exist")]
    NotFound(String),
    #[error("unable to fetch wiki page `{slug}`: {source}")]
    Fetch {
        slug: String,
        #[source]
        source: HttpError,
    },
    #[error("invalid wiki endpoint: {0}")]
    Endpoint(#[source] HttpError),
}

impl From<WikiError> for dionysus_common::DionysusError {
    fn from(err: WikiError) -> Self {
        let message = err.to_string();
        match err {
            WikiError::NotFound(_) => Self::NotFound(message),
            WikiError::Fetch { .. } => Self::Fetch(message),
            WikiError::Endpoint(_) => Self::Config(message),
        }
    }
}

#[derive(Clone)]
pub struct WikiClient {
    http: HttpClient,
}

impl WikiClient {
    pub fn new(endpoint: &str) -> Result<Self, WikiError> {
        let http = HttpClient::new(endpoint).map_err(WikiError::Endpoint)?;
        Ok(Self { http })
    }

    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.http = self.http.with_timeout(dur);
        self
    }

    /// Path (relative to the endpoint) of the page for `slug`.
    ///
    /// ```
    /// use dionysus_wiki::WikiClient;
    ///
    /// assert_eq!(WikiClient::page_path("Monkey_D._Luffy"), "wiki/Monkey_D._Luffy");
    /// assert_eq!(WikiClient::page_path("Who?"), "wiki/Who%3F");
    /// ```
    pub fn page_path(slug: &str) -> String {
        let mut path = String::with_capacity(slug.len() + 5);
        path.push_str("wiki/");
        for ch in slug.chars() {
            match ch {
                '?' => path.push_str("%3F"),
                '#' => path.push_str("%23"),
                '%' => path.push_str("%25"),
                _ => path.push(ch),
            }
        }
        path
    }

    /// Raw HTML for `slug`. Non-success statuses are errors; the body is
    /// not looked at in that case.
    pub async fn fetch_page(&self, slug: &str) -> Result<String, WikiError> {
        let started = Instant::now();
        tracing::info!(target: "wiki", %slug, "wiki.fetch.start");

        match self
            .http
            .get_text(&Self::page_path(slug), RequestOpts::default())
            .await
        {
            Ok(html) => {
                tracing::info!(
                    target: "wiki",
                    %slug,
                    bytes = html.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "wiki.fetch.success"
                );
                Ok(html)
            }
            Err(e) if e.status().is_some_and(|s| s.as_u16() == 404) => {
                tracing::info!(target: "wiki", %slug, "wiki.fetch.not_found");
                Err(WikiError::NotFound(slug.to_string()))
            }
            Err(e) => {
                tracing::warn!(
                    target: "wiki",
                    %slug,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "wiki.fetch.error"
                );
                Err(WikiError::Fetch {
                    slug: slug.to_string(),
                    source: e,
                })
            }
        }
    }

    /// Canonicalise `name`, fetch its page and extract a record.
    pub async fn lookup(&self, name: &str) -> Result<CharacterRecord, WikiError> {
        let slug = canonical_slug(name);
        tracing::debug!(target: "wiki", %name, %slug, "wiki.lookup.canonical");
        let html = self.fetch_page(slug).await?;
        Ok(extract_character(&html))
    }

    /// Like [`Self::lookup`], but any failure becomes
    /// [`CharacterRecord::unavailable`].
    pub async fn lookup_or_unavailable(&self, name: &str) -> CharacterRecord {
        self.lookup(name)
            .await
            .unwrap_or_else(|_| CharacterRecord::unavailable())
    }
}

//! Video discovery for the `rv` command.
//!
//! This crate exposes the [`traits::VideoSearch`] interface consumed by the
//! command layer and a YouTube Data API v3 implementation in [`youtube`].
pub mod traits;
pub mod youtube;

pub use traits::{watch_url, VideoError, VideoSearch};
pub use youtube::YouTubeApi;

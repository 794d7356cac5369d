pub mod client;
pub mod types;

pub use client::{YouTubeApi, DEFAULT_ENDPOINT};

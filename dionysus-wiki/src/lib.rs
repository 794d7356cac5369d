//! Character lookups against the Anime Crossover Defense wiki.
//!
//! - [`canonical_slug`]: alias table for names players actually type
//! - [`WikiClient`]: single-shot page fetcher
//! - [`extract`]: HTML → [`CharacterRecord`] field extractors
//!
//! # Examples
//! ```no_run
//! use dionysus_wiki::WikiClient;
//!
//! # async fn demo() -> Result<(), dionysus_wiki::WikiError> {
//! let wiki = WikiClient::new(dionysus_wiki::DEFAULT_ENDPOINT)?;
//! let record = wiki.lookup("luffy").await?;
//! println!("{} ({})", record.display_name, record.rarity);
//! # Ok(()) }
//! ```

pub mod aliases;
pub mod client;
pub mod extract;
pub mod record;

pub use aliases::canonical_slug;
pub use client::{WikiClient, WikiError, DEFAULT_ENDPOINT};
pub use extract::extract_character;
pub use record::CharacterRecord;

//! Loader for bot configuration with YAML + environment overlays.
//!
//! Sources are merged in this order, later ones winning:
//!
//! 1. [`DEFAULT_TEMPLATE`], which reads `${TOKEN}` and `${YOUTUBE_API_KEY}`
//!    from the process environment;
//! 2. any YAML files or inline snippets attached to the loader;
//! 3. `DIONYSUS__`-prefixed environment variables (`DIONYSUS__DISCORD__TOKEN`
//!    maps to `discord.token`).
//!
//! `${VAR}` placeholders are expanded after merging. Credentials that are
//! empty or still unexpanded make [`DionysusConfigLoader::load`] fail.
use config::{Config, ConfigError, Environment, File};
use dionysus_common::observability::LogFormat;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// YouTube's `search.list` refuses `maxResults` above this.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Built-in base layer. Credentials come from the same environment
/// variables the bot has always used.
pub const DEFAULT_TEMPLATE: &str = r#"
discord:
  token: "${TOKEN}"
youtube:
  api_key: "${YOUTUBE_API_KEY}"
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct DionysusConfig {
    pub discord: DiscordConfig,
    pub youtube: YoutubeConfig,
    #[serde(default)]
    pub wiki: WikiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    pub token: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeConfig {
    pub api_key: String,
    #[serde(default = "default_youtube_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    #[serde(default = "default_wiki_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_wiki_endpoint(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default = "default_true")]
    pub stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            format: LogFormat::default(),
            filter: default_filter(),
            stderr: true,
        }
    }
}

fn default_prefix() -> String {
    "!".into()
}
fn default_youtube_endpoint() -> String {
    "https://www.googleapis.com/youtube/v3/".into()
}
fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}
fn default_wiki_endpoint() -> String {
    "https://acd.fandom.com".into()
}
fn default_filter() -> String {
    "info".into()
}
fn default_true() -> bool {
    true
}

impl DionysusConfig {
    /// Reject configurations the bot cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_secret("discord.token", &self.discord.token)?;
        require_secret("youtube.api_key", &self.youtube.api_key)?;
        if self.discord.prefix.trim().is_empty() {
            return Err(ConfigError::Message("discord.prefix must not be empty".into()));
        }
        Ok(())
    }

    /// Page size clamped to what the search API accepts.
    pub fn page_size(&self) -> u32 {
        self.youtube.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// One-line description safe to print; secrets are reduced to their length.
    pub fn summary(&self) -> String {
        format!(
            "prefix={:?} discord.token=<{} chars> youtube.api_key=<{} chars> youtube.endpoint={} page_size={} wiki.endpoint={} log.format={:?} log.filter={}",
            self.discord.prefix,
            self.discord.token.len(),
            self.youtube.api_key.len(),
            self.youtube.endpoint,
            self.page_size(),
            self.wiki.endpoint,
            self.logging.format,
            self.logging.filter,
        )
    }
}

fn require_secret(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Message(format!("{field} is missing")));
    }
    if trimmed.contains("${") {
        return Err(ConfigError::Message(format!(
            "{field} references an unset environment variable: {trimmed}"
        )));
    }
    Ok(())
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct DionysusConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for DionysusConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DionysusConfigLoader {
    /// Start from [`DEFAULT_TEMPLATE`]; `DIONYSUS__` env overrides are applied at load.
    ///
    /// ```
    /// use dionysus_config::DionysusConfigLoader;
    ///
    /// let config = DionysusConfigLoader::new()
    ///     .with_yaml_str("discord:\n  token: abc\nyoutube:\n  api_key: def\n")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.discord.prefix, "!");
    /// assert_eq!(config.wiki.endpoint, "https://acd.fandom.com");
    /// ```
    pub fn new() -> Self {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_TEMPLATE, config::FileFormat::Yaml));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Like [`Self::with_file`], but a missing file is skipped so deployments
    /// can rely purely on environment variables.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder, expand `${VAR}` placeholders, deserialize and validate.
    pub fn load(self) -> Result<DionysusConfig, ConfigError> {
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix("DIONYSUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: DionysusConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;
        typed.validate()?;

        Ok(typed)
    }
}

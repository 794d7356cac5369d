//! Chat-platform-neutral reply model.
//!
//! Handlers build [`Reply`] values; the binary converts them into whatever
//! the chat library wants. Length limits follow Discord's embed rules.
use std::fmt;

pub const DESCRIPTION_LIMIT: usize = 4096;
pub const FIELD_NAME_LIMIT: usize = 256;
pub const FIELD_VALUE_LIMIT: usize = 1024;
pub const TITLE_LIMIT: usize = 256;

/// Placeholder for field names that should render empty.
pub const BLANK_NAME: &str = "\u{200b}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Footer or author line: text plus an optional icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Byline {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: u32,
    pub image_url: Option<String>,
    pub author: Option<Byline>,
    pub footer: Option<Byline>,
    pub fields: Vec<EmbedField>,
}

impl Embed {
    pub fn new(color: u32) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(truncate_chars(&title.into(), TITLE_LIMIT));
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(truncate_chars(&text.into(), DESCRIPTION_LIMIT));
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn author(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.author = Some(Byline {
            text: text.into(),
            icon_url,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.footer = Some(Byline {
            text: text.into(),
            icon_url,
        });
        self
    }

    /// Add a field; an empty name becomes [`BLANK_NAME`], long values are cut.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        let name = name.into();
        let name = if name.is_empty() {
            BLANK_NAME.to_string()
        } else {
            truncate_chars(&name, FIELD_NAME_LIMIT)
        };
        self.fields.push(EmbedField {
            name,
            value: truncate_chars(&value.into(), FIELD_VALUE_LIMIT),
            inline,
        });
        self
    }
}

/// Cut `s` to at most `limit` characters, ending with `…` when shortened.
pub fn truncate_chars(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    let mut out: String = s.chars().take(limit.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Plain-text rendering, used by the terminal runner.
impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(text) => write!(f, "{text}"),
            Reply::Embed(embed) => write!(f, "{embed}"),
        }
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(author) = &self.author {
            writeln!(f, "[{}]", author.text)?;
        }
        if let Some(title) = &self.title {
            writeln!(f, "# {title}")?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "{}", description.trim_end())?;
        }
        for field in &self.fields {
            if field.name != BLANK_NAME {
                writeln!(f, "## {}", field.name)?;
            }
            writeln!(f, "{}", field.value)?;
        }
        if let Some(url) = &self.image_url {
            writeln!(f, "(image: {url})")?;
        }
        if let Some(footer) = &self.footer {
            write!(f, "-- {}", footer.text)?;
        }
        Ok(())
    }
}

//! Field extraction from a fetched character page.
//!
//! Every extractor works on the same parsed [`Html`] and is independent of the
//! others: a missing element only affects its own field. Selectors target the
//! Fandom (MediaWiki + portable infobox) markup.

use crate::record::{
    CharacterRecord, DEFAULT_DISPLAY_NAME, DEFAULT_RARITY, NO_ABILITY_INFO, NO_CONTENT,
    NO_PARAGRAPH,
};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

pub const ABILITY_START_MARKER: &str = "Ability Information";
pub const ABILITY_END_MARKER: &str = "Usage Guide";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static CONTENT: LazyLock<Selector> = LazyLock::new(|| selector("div.mw-parser-output"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static BOLD: LazyLock<Selector> = LazyLock::new(|| selector("b"));
static RARITY: LazyLock<Selector> = LazyLock::new(|| selector("div.pi-data-value.pi-font"));
static PAGE_TITLE: LazyLock<Selector> = LazyLock::new(|| selector("span.mw-page-title-main"));
static PORTRAIT: LazyLock<Selector> = LazyLock::new(|| selector("figure.pi-item.pi-image"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));

/// Parse `html` and pull every field, applying defaults for missing ones.
pub fn extract_character(html: &str) -> CharacterRecord {
    let document = Html::parse_document(html);
    let content = content_container(&document);

    let record = CharacterRecord {
        display_name: display_name(&document),
        description: description(content),
        ability_info: ability_info(content),
        rarity: rarity(&document),
        quote: quote(content),
        image_url: image_url(&document),
    };

    tracing::debug!(
        target: "wiki.extract",
        display_name = %record.display_name,
        rarity = %record.rarity,
        has_content = content.is_some(),
        has_quote = record.quote.is_some(),
        has_image = record.image_url.is_some(),
        "wiki.extract.done"
    );
    record
}

/// The article body, `div.mw-parser-output`.
pub fn content_container(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&CONTENT).next()
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of the first paragraph in the article body, untrimmed.
pub fn description(content: Option<ElementRef<'_>>) -> String {
    let Some(content) = content else {
        return NO_CONTENT.to_string();
    };
    content
        .select(&PARAGRAPH)
        .next()
        .map(text_of)
        .unwrap_or_else(|| NO_PARAGRAPH.to_string())
}

/// Ability block from the article body, or the fallback sentinel.
pub fn ability_info(content: Option<ElementRef<'_>>) -> String {
    let section = content.and_then(|el| ability_section(&text_of(el)));
    if section.is_none() {
        tracing::debug!(target: "wiki.extract", "wiki.extract.ability_section_missing");
    }
    section.unwrap_or_else(|| NO_ABILITY_INFO.to_string())
}

/// Slice `text` between the first [`ABILITY_START_MARKER`] and the first
/// [`ABILITY_END_MARKER`] (both excluded) and format it line by line.
///
/// Both markers are found by plain substring search. `None` when either is
/// missing, when the end marker does not follow the start marker, or when
/// nothing but whitespace sits between them.
///
/// ```
/// use dionysus_wiki::extract::ability_section;
///
/// let text = "Intro Ability Information\nGum Gum Pistol: punches far\nPassive\nUsage Guide more";
/// assert_eq!(
///     ability_section(text).unwrap(),
///     "```Gum Gum Pistol:``` *punches far*\nPassive"
/// );
/// ```
pub fn ability_section(text: &str) -> Option<String> {
    let start = text.find(ABILITY_START_MARKER)? + ABILITY_START_MARKER.len();
    let end = text.find(ABILITY_END_MARKER)?;
    let region = text.get(start..end)?.trim();
    if region.is_empty() {
        return None;
    }
    let lines: Vec<String> = region.split('\n').map(format_ability_line).collect();
    Some(lines.join("\n"))
}

/// `"Name: does things"` becomes ``"```Name:``` *does things*"``; lines
/// without a colon are returned as they are.
pub fn format_ability_line(line: &str) -> String {
    match line.split_once(':') {
        Some((name, rest)) => format!("```{name}:``` *{}*", rest.trim()),
        None => line.to_string(),
    }
}

/// Lower-cased infobox value, `"rare"` when the page has none.
pub fn rarity(document: &Html) -> String {
    document
        .select(&RARITY)
        .next()
        .map(|el| text_of(el).trim().to_lowercase())
        .unwrap_or_else(|| DEFAULT_RARITY.to_string())
}

/// First bold text in the article body, kept only if it opens with `"`.
pub fn quote(content: Option<ElementRef<'_>>) -> Option<String> {
    let bold = content?.select(&BOLD).next()?;
    let text = text_of(bold).trim().to_string();
    text.starts_with('"').then_some(text)
}

pub fn display_name(document: &Html) -> String {
    document
        .select(&PAGE_TITLE)
        .next()
        .map(text_of)
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
}

/// Portrait `src` with every space removed.
pub fn image_url(document: &Html) -> Option<String> {
    let figure = document.select(&PORTRAIT).next()?;
    let img = figure.select(&IMG).next()?;
    let src = img.value().attr("src")?;
    Some(src.replace(' ', ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NO_ABILITY_INFO;

    fn page(body: &str) -> String {
        format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>")
    }

    #[test]
    fn ability_lines_are_formatted_in_order() {
        let text = "header Ability Information\n\
                    Gear Second: speed boost\n\
                    Cooldown 10s\n\
                    Gear Third: giant fist: crushes\n\
                    Usage Guide tail";
        let out = ability_section(text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "```Gear Second:``` *speed boost*",
                "Cooldown 10s",
                "```Gear Third:``` *giant fist: crushes*",
            ]
        );
    }

    #[test]
    fn missing_either_marker_is_none() {
        assert_eq!(ability_section("Ability Information\nA: b\n"), None);
        assert_eq!(ability_section("A: b\nUsage Guide"), None);
        assert_eq!(ability_section("nothing here"), None);
    }

    #[test]
    fn end_marker_before_start_marker_is_none() {
        assert_eq!(
            ability_section("Usage Guide first, then Ability Information\nA: b"),
            None
        );
    }

    #[test]
    fn first_occurrence_of_each_marker_wins() {
        let text = "Ability Information\nA: one\nUsage Guide\nAbility Information\nB: two\nUsage Guide";
        assert_eq!(ability_section(text).unwrap(), "```A:``` *one*");
    }

    #[test]
    fn empty_region_falls_back() {
        assert_eq!(ability_section("Ability Information \n\n Usage Guide"), None);
        let html = page(
            r#"<div class="mw-parser-output"><h2>Ability Information</h2><h2>Usage Guide</h2></div>"#,
        );
        let doc = Html::parse_document(&html);
        assert_eq!(ability_info(content_container(&doc)), NO_ABILITY_INFO);
    }

    #[test]
    fn colon_line_description_is_trimmed_but_name_is_not() {
        assert_eq!(format_ability_line(" Punch :   hits "), "``` Punch :``` *hits*");
        assert_eq!(format_ability_line("no colon here"), "no colon here");
    }

    #[test]
    fn rarity_defaults_and_lowercases() {
        let doc = Html::parse_document(&page("<p>x</p>"));
        assert_eq!(rarity(&doc), "rare");

        let doc = Html::parse_document(&page(
            r#"<aside><div class="pi-data-value pi-font">  Epic </div></aside>"#,
        ));
        assert_eq!(rarity(&doc), "epic");
    }

    #[test]
    fn quote_requires_leading_double_quote() {
        let doc = Html::parse_document(&page(
            r#"<div class="mw-parser-output"><p><b>Monkey D. Luffy</b> is a pirate.</p></div>"#,
        ));
        assert_eq!(quote(content_container(&doc)), None);

        let doc = Html::parse_document(&page(
            r#"<div class="mw-parser-output"><b> "I'm gonna be King of the Pirates!" </b></div>"#,
        ));
        assert_eq!(
            quote(content_container(&doc)).as_deref(),
            Some("\"I'm gonna be King of the Pirates!\"")
        );
    }

    #[test]
    fn quote_only_looks_at_first_bold() {
        let doc = Html::parse_document(&page(
            r#"<div class="mw-parser-output"><b>Name</b><b>"Later quote"</b></div>"#,
        ));
        assert_eq!(quote(content_container(&doc)), None);
    }

    #[test]
    fn image_chain_breaks_to_none() {
        let doc = Html::parse_document(&page(r#"<figure class="pi-item pi-image"></figure>"#));
        assert_eq!(image_url(&doc), None);

        let doc = Html::parse_document(&page(
            r#"<figure class="pi-item pi-image"><img alt="x"></figure>"#,
        ));
        assert_eq!(image_url(&doc), None);

        let doc = Html::parse_document(&page(
            r#"<figure class="pi-item pi-image"><a><img src="https://img.example/a b.png"></a></figure>"#,
        ));
        assert_eq!(image_url(&doc).as_deref(), Some("https://img.example/ab.png"));
    }

    #[test]
    fn empty_page_gets_every_default() {
        let record = extract_character(&page(""));
        assert_eq!(record.display_name, "Unknown Character");
        assert_eq!(record.description, NO_CONTENT);
        assert_eq!(record.ability_info, NO_ABILITY_INFO);
        assert_eq!(record.rarity, "rare");
        assert_eq!(record.quote, None);
        assert_eq!(record.image_url, None);
    }

    #[test]
    fn content_without_paragraph() {
        let doc = Html::parse_document(&page(r#"<div class="mw-parser-output"><div>x</div></div>"#));
        assert_eq!(description(content_container(&doc)), NO_PARAGRAPH);
    }
}

//! Free-form character names to wiki page slugs.

/// Lower-cased alias → exact page slug.
static ALIASES: &[(&str, &str)] = &[
    // One Piece
    ("luffy", "Monkey_D._Luffy"),
    ("monkey d luffy", "Monkey_D._Luffy"),
    ("monkey d. luffy", "Monkey_D._Luffy"),
    ("zoro", "Roronoa_Zoro"),
    ("roronoa zoro", "Roronoa_Zoro"),
    ("sanji", "Vinsmoke_Sanji"),
    ("ace", "Portgas_D._Ace"),
    ("portgas d ace", "Portgas_D._Ace"),
    ("shanks", "Red-Haired_Shanks"),
    ("whitebeard", "Edward_Newgate"),
    ("blackbeard", "Marshall_D._Teach"),
    // Naruto
    ("naruto", "Naruto_Uzumaki"),
    ("sasuke", "Sasuke_Uchiha"),
    ("itachi", "Itachi_Uchiha"),
    ("madara", "Madara_Uchiha"),
    ("kakashi", "Kakashi_Hatake"),
    // Dragon Ball
    ("goku", "Son_Goku"),
    ("son goku", "Son_Goku"),
    ("vegeta", "Vegeta"),
    ("gohan", "Son_Gohan"),
    ("frieza", "Frieza"),
    // Bleach
    ("ichigo", "Ichigo_Kurosaki"),
    ("aizen", "Sosuke_Aizen"),
    ("byakuya", "Byakuya_Kuchiki"),
    // Jujutsu Kaisen
    ("gojo", "Satoru_Gojo"),
    ("satoru gojo", "Satoru_Gojo"),
    ("sukuna", "Ryomen_Sukuna"),
    ("yuji", "Yuji_Itadori"),
    ("itadori", "Yuji_Itadori"),
    ("megumi", "Megumi_Fushiguro"),
    // Demon Slayer
    ("tanjiro", "Tanjiro_Kamado"),
    ("nezuko", "Nezuko_Kamado"),
    ("zenitsu", "Zenitsu_Agatsuma"),
    ("rengoku", "Kyojuro_Rengoku"),
    // Attack on Titan
    ("eren", "Eren_Yeager"),
    ("levi", "Levi_Ackerman"),
    ("mikasa", "Mikasa_Ackerman"),
    // One Punch Man
    ("saitama", "Saitama"),
    ("genos", "Genos"),
    ("tatsumaki", "Tatsumaki"),
    // My Hero Academia
    ("all might", "All_Might"),
    ("deku", "Izuku_Midoriya"),
    ("bakugo", "Katsuki_Bakugo"),
    ("todoroki", "Shoto_Todoroki"),
    // Hunter x Hunter
    ("gon", "Gon_Freecss"),
    ("killua", "Killua_Zoldyck"),
    ("hisoka", "Hisoka_Morow"),
    ("meruem", "Meruem"),
    // JoJo
    ("jotaro", "Jotaro_Kujo"),
    ("dio", "Dio_Brando"),
    ("giorno", "Giorno_Giovanna"),
];

/// Resolve `name` to the wiki slug it is known by.
///
/// Matching is case-insensitive. Unknown names are returned untouched on the
/// assumption that the caller already typed the slug.
///
/// ```
/// use dionysus_wiki::canonical_slug;
///
/// assert_eq!(canonical_slug("LUFFY"), "Monkey_D._Luffy");
/// assert_eq!(canonical_slug("Some_Unlisted_Page"), "Some_Unlisted_Page");
/// ```
pub fn canonical_slug(name: &str) -> &str {
    let lowered = name.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, slug)| *slug)
        .unwrap_or(name)
}

/// Every alias the table knows about, in table order.
pub fn known_aliases() -> impl Iterator<Item = &'static str> {
    ALIASES.iter().map(|(alias, _)| *alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alias_resolves_in_any_case() {
        for (alias, slug) in ALIASES {
            assert_eq!(canonical_slug(alias), *slug);
            assert_eq!(canonical_slug(&alias.to_uppercase()), *slug);
            let mixed: String = alias
                .chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            assert_eq!(canonical_slug(&mixed), *slug);
        }
    }

    #[test]
    fn unknown_names_pass_through_unchanged() {
        for name in ["Kirito", "Monkey_D._Luffy", "  luffy", "", "Zoro!"] {
            assert_eq!(canonical_slug(name), name);
        }
    }

    #[test]
    fn aliases_are_stored_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for alias in known_aliases() {
            assert_eq!(alias, alias.to_lowercase());
            assert!(seen.insert(alias), "duplicate alias {alias}");
        }
    }
}

//! Major arcana draws.
use crate::palette;
use crate::reply::Embed;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TarotCard {
    pub name: &'static str,
    /// Upright and reversed readings, one per line.
    pub meaning: &'static str,
    pub image_url: &'static str,
}

pub static DECK: [TarotCard; 22] = [
    TarotCard {
        name: "The Fool",
        meaning: "Upright: innocence, new beginnings, free spirit \nReversed: recklessness, taken advantage of, inconsideration",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-fool_350x500_crop_center.png?v=1488830339",
    },
    TarotCard {
        name: "The Magician",
        meaning: "Upright: willpower, desire, creation, manifestation \nReversed: trickery, illusions, out of touch",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-magician_350x500_crop_center.png?v=1488831715",
    },
    TarotCard {
        name: "The High Priestess",
        meaning: "Upright: intuitive, unconscious, inner voice \nReversed: lack of center, lost inner voice, repressed feelings",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-high-priestess_350x500_crop_center.png?v=1488835017",
    },
    TarotCard {
        name: "The Empress",
        meaning: "Upright: motherhood, fertility, nature \nReversed: dependence, smothering, emptiness, nosiness",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-empress_350x500_crop_center.png?v=1488861619",
    },
    TarotCard {
        name: "The Emperor",
        meaning: "Upright: authority, structure, control, fatherhood \nReversed: tyranny, rigidity, coldness",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-emperor_350x500_crop_center.png?v=1488863121",
    },
    TarotCard {
        name: "The Hierophant",
        meaning: "Upright: tradition, conformity, morality, ethics \nReversed: rebellion, subversiveness, new approaches",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-hierophant_350x500_crop_center.png?v=1488864368",
    },
    TarotCard {
        name: "The Lovers",
        meaning: "Upright: partnerships, duality, union \nReversed: loss of balance, one-sidedness, disharmony",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-lovers_350x500_crop_center.png?v=1488900062",
    },
    TarotCard {
        name: "The Chariot",
        meaning: "Upright: direction, control, willpower \nReversed: lack of control, lack of direction, aggression",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-chariot_350x500_crop_center.png?v=1488905976",
    },
    TarotCard {
        name: "Strength",
        meaning: "Upright: inner strength, bravery, compassion, focus \nReversed: self doubt, weakness, insecurity",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-strength_350x500_crop_center.png?v=1488907669",
    },
    TarotCard {
        name: "The Hermit",
        meaning: "Upright: contemplation, search for truth, inner guidance \nReversed: loneliness, isolation, lost your way",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-hermit_350x500_crop_center.png?v=1488908379",
    },
    TarotCard {
        name: "The Wheel of Fortune",
        meaning: "Upright: change, cycles, inevitable fate \nReversed: no control, clinging to control, bad luck",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-wheel-of-fortune_350x500_crop_center.png?v=1488919069",
    },
    TarotCard {
        name: "Justice",
        meaning: "Upright: cause and effect, clarity, truth \nReversed: dishonesty, unaccountability, unfairness",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-justice_350x500_crop_center.png?v=1488920859",
    },
    TarotCard {
        name: "The Hanged Man",
        meaning: "Upright: sacrifice, release, martyrdom \nReversed: stalling, needless sacrifice, fear of sacrifice",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-hanged-man_350x500_crop_center.png?v=1488921716",
    },
    TarotCard {
        name: "Death",
        meaning: "Upright: end of cycle, beginnings, change, metamorphosis \nReversed: fear of change, holding on, stagnation, decay",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-death_350x500_crop_center.png?v=1488924469",
    },
    TarotCard {
        name: "Temperance",
        meaning: "Upright: middle path, patience, finding meaning \nReversed: extremes, excess, lack of balance",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-temperance_350x500_crop_center.png?v=1489166942",
    },
    TarotCard {
        name: "The Devil",
        meaning: "Upright: addiction, materialism, playfulness \nReversed: freedom, release, restoring control",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-devil_350x500_crop_center.png?v=1489167792",
    },
    TarotCard {
        name: "The Tower",
        meaning: "Upright: sudden upheaval, broken pride, disaster \nReversed: disaster avoided, delayed disaster, fear of suffering",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-tower_350x500_crop_center.png?v=1489185889",
    },
    TarotCard {
        name: "The Star",
        meaning: "Upright: hope, faith, rejuvenation \nReversed: faithlessness, discouragement, insecurity",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-star_350x500_crop_center.png?v=1489187135",
    },
    TarotCard {
        name: "The Moon",
        meaning: "Upright: unconscious, illusions, intuition \nReversed: confusion, fear, misinterpretation",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-moon_350x500_crop_center.png?v=1489188353",
    },
    TarotCard {
        name: "The Sun",
        meaning: "Upright: joy, success, celebration, positivity \nReversed: negativity, depression, sadness",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-sun_350x500_crop_center.png?v=1489190376",
    },
    TarotCard {
        name: "Judgement",
        meaning: "Upright: reflection, reckoning, awakening \nReversed: lack of self awareness, doubt, self loathing",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-judgement_350x500_crop_center.png?v=1489191982",
    },
    TarotCard {
        name: "The World",
        meaning: "Upright: fulfillment, harmony, completion \nReversed: incompletion, no closure",
        image_url: "https://labyrinthos.co/cdn/shop/articles/tarot-card-meanings-cheat-sheet-major-arcana-world_350x500_crop_center.png?v=1489193487",
    },
];

/// Uniformly random card from [`DECK`].
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> &'static TarotCard {
    DECK.choose(rng).unwrap_or(&DECK[0])
}

/// Look a card up by its exact name.
pub fn card(name: &str) -> Option<&'static TarotCard> {
    DECK.iter().find(|c| c.name == name)
}

pub fn tarot_embed(card: &TarotCard) -> Embed {
    Embed::new(palette::TAROT)
        .title(format!("Your Tarot Card: {}", card.name))
        .description(card.meaning)
        .image(card.image_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_names_are_unique() {
        let names: HashSet<_> = DECK.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 22);
    }

    #[test]
    fn many_draws_visit_every_card() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            seen.insert(draw(&mut rng).name);
        }
        assert_eq!(seen.len(), DECK.len());
    }

    #[test]
    fn drawn_card_matches_table_entry() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let drawn = draw(&mut rng);
            let listed = card(drawn.name).unwrap();
            assert_eq!(drawn.meaning, listed.meaning);
            assert_eq!(drawn.image_url, listed.image_url);
            assert!(drawn.meaning.starts_with("Upright: "));
            assert!(drawn.meaning.contains("\nReversed: "));
        }
    }

    #[test]
    fn embed_carries_card_details() {
        let fool = card("The Fool").unwrap();
        let embed = tarot_embed(fool);
        assert_eq!(embed.title.as_deref(), Some("Your Tarot Card: The Fool"));
        assert_eq!(embed.description.as_deref(), Some(fool.meaning));
        assert_eq!(embed.image_url.as_deref(), Some(fool.image_url));
        assert_eq!(embed.color, palette::TAROT);
    }
}

//! Static weighting and lookup tables.
//!
//! All scoring and selection logic is data-driven: the tables here map raw
//! answer values to dimension contributions, avatar identities, neophobia
//! weights, substitution suggestions, and fun facts. The computation code in
//! the sibling modules stays generic over these tables, which keeps each
//! table independently testable.
//!
//! Table entries keep their original copy, emoji included; the rendering
//! layer strips non-ASCII characters from its own copy before drawing.

use crate::survey::fields;

use super::dimensions::Dimension;

// ---------------------------------------------------------------------------
// Dimension weighting
// ---------------------------------------------------------------------------

/// Per-field answer weighting: each answer value contributes the listed
/// `(dimension, points)` pairs additively.
pub struct FieldWeights {
    /// Survey field the weighting applies to.
    pub field: &'static str,
    /// Answer value mapped to its dimension contributions.
    pub entries: &'static [(&'static str, &'static [(Dimension, u8)])],
}

use Dimension::{Adventurous, Crunchy, Salty, Sour, Sweet, Umami};

/// Weighted answer fields, applied in order by the dimension scorer.
pub static DIMENSION_WEIGHTS: &[FieldWeights] = &[
    // Primary flavour preference
    FieldWeights {
        field: fields::FLAVOUR,
        entries: &[
            ("Sweet", &[(Sweet, 4)]),
            ("Salty", &[(Salty, 4)]),
            ("Sour & Tangy", &[(Sour, 4)]),
            ("Savoury / Umami", &[(Umami, 4)]),
            ("Slightly Bitter", &[(Umami, 2)]),
        ],
    },
    // Texture preference
    FieldWeights {
        field: fields::TEXTURE,
        entries: &[
            ("Crunchy & Crispy", &[(Crunchy, 4)]),
            ("Chewy", &[(Crunchy, 1)]),
            ("Soft & Creamy", &[(Sweet, 1)]),
            ("Fluffy & Airy", &[(Sweet, 1)]),
            ("Juicy & Wet", &[(Sour, 1)]),
        ],
    },
    // Favourite snack
    FieldWeights {
        field: fields::SNACK,
        entries: &[
            ("Chips / Crisps", &[(Salty, 2), (Crunchy, 2)]),
            ("Chocolate", &[(Sweet, 2)]),
            ("Biscuits / Cookies", &[(Sweet, 1), (Crunchy, 1)]),
            ("Fresh Fruit", &[(Sour, 1), (Adventurous, 1)]),
            ("Seaweed Snack", &[(Salty, 1), (Crunchy, 2), (Adventurous, 2)]),
            ("Ice Cream", &[(Sweet, 2)]),
            ("Nuts or Seeds", &[(Salty, 1), (Crunchy, 2), (Adventurous, 1)]),
        ],
    },
    // Tried new food recently
    FieldWeights {
        field: fields::TRIED_NEW,
        entries: &[
            ("Yes, definitely!", &[(Adventurous, 3)]),
            ("Maybe once or twice", &[(Adventurous, 2)]),
            ("Not really", &[(Adventurous, 0)]),
            ("No", &[(Adventurous, 0)]),
        ],
    },
    // Reaction to unfamiliar food
    FieldWeights {
        field: fields::NEW_FOOD_REACTION,
        entries: &[
            ("Try it straight away!", &[(Adventurous, 3)]),
            ("Ask what it is first", &[(Adventurous, 2)]),
            ("Depends how it looks", &[(Adventurous, 1)]),
            ("I usually avoid it", &[(Adventurous, 0)]),
        ],
    },
    // Willingness to try healthy substitutes
    FieldWeights {
        field: fields::SUBSTITUTE_WILLINGNESS,
        entries: &[
            ("Definitely yes!", &[(Adventurous, 2)]),
            ("Maybe, if it tastes similar", &[(Adventurous, 1)]),
            ("Not sure", &[(Adventurous, 0)]),
            ("Probably not", &[(Adventurous, 0)]),
        ],
    },
];

/// Cap applied to each multi-select adventurous bonus before addition.
pub const MULTI_SELECT_BONUS_CAP: usize = 4;

/// Sentinel value in the adventurous-foods list that must not count
/// towards the bonus.
pub const ADVENTUROUS_FOODS_SENTINEL: &str = "None of these yet!";

// ---------------------------------------------------------------------------
// Avatar identities
// ---------------------------------------------------------------------------

/// Display identity associated with a dominant dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AvatarIdentity {
    /// Full display name, emoji included (kept in data/exports).
    pub name: &'static str,
    /// Plain name used on the report card.
    pub plain_name: &'static str,
    /// Short uppercase label drawn inside the circular badge.
    pub badge: &'static str,
    /// One-sentence description.
    pub description: &'static str,
}

/// Avatar identity per dominant dimension.
pub static AVATAR_IDENTITIES: &[(Dimension, AvatarIdentity)] = &[
    (
        Sweet,
        AvatarIdentity {
            name: "🍭 Sweet Seeker",
            plain_name: "Sweet Seeker",
            badge: "SWEET",
            description: "You love sweet flavours and creamy textures!",
        },
    ),
    (
        Salty,
        AvatarIdentity {
            name: "🧂 Salt Captain",
            plain_name: "Salt Captain",
            badge: "SALTY",
            description: "Bold salty and savoury tastes are your zone!",
        },
    ),
    (
        Sour,
        AvatarIdentity {
            name: "🍋 Sour Sparks",
            plain_name: "Sour Sparks",
            badge: "SOUR",
            description: "Tangy, sharp, and zingy — you love the tingle!",
        },
    ),
    (
        Umami,
        AvatarIdentity {
            name: "🍜 Umami Master",
            plain_name: "Umami Master",
            badge: "UMAMI",
            description: "Deep savoury flavours are your happy place!",
        },
    ),
    (
        Crunchy,
        AvatarIdentity {
            name: "🥨 Crunch Hero",
            plain_name: "Crunch Hero",
            badge: "CRUNCH",
            description: "Texture is everything — you live for the crunch!",
        },
    ),
    (
        Adventurous,
        AvatarIdentity {
            name: "🌍 Food Explorer",
            plain_name: "Food Explorer",
            badge: "EXPLORER",
            description: "You're a natural adventurer who loves trying new things!",
        },
    ),
];

/// Fallback identity for a dimension missing from [`AVATAR_IDENTITIES`].
pub static GENERIC_AVATAR: AvatarIdentity = AvatarIdentity {
    name: "🌱 Food Friend",
    plain_name: "Food Friend",
    badge: "FOOD",
    description: "You have a balanced palate!",
};

// ---------------------------------------------------------------------------
// Neophobia index weights
// ---------------------------------------------------------------------------

/// Per-field answer weights for the food-neophobia index.
pub static NEOPHOBIA_WEIGHTS: &[(&str, &[(&str, u8)])] = &[
    (
        fields::TRIED_NEW,
        &[
            ("Yes, definitely!", 3),
            ("Maybe once or twice", 2),
            ("Not really", 1),
            ("No", 0),
        ],
    ),
    (
        fields::NEW_FOOD_REACTION,
        &[
            ("Try it straight away!", 3),
            ("Ask what it is first", 2),
            ("Depends how it looks", 1),
            ("I usually avoid it", 0),
        ],
    ),
    (
        fields::SUBSTITUTE_WILLINGNESS,
        &[
            ("Definitely yes!", 2),
            ("Maybe, if it tastes similar", 1),
            ("Not sure", 0),
            ("Probably not", 0),
        ],
    ),
];

// ---------------------------------------------------------------------------
// Substitution suggestions
// ---------------------------------------------------------------------------

/// Curated healthy-swap suggestions keyed by (dominant dimension, texture).
///
/// Definition order matters: when no exact (dimension, texture) key matches,
/// the selector falls back to the first entry whose dimension matches.
pub static SUBSTITUTIONS: &[((Dimension, &str), [&str; 3])] = &[
    (
        (Sweet, "Soft & Creamy"),
        [
            "Greek yogurt with honey & berries 🍓",
            "Banana nice cream (frozen banana blended) 🍌",
            "Mango coconut chia pudding 🥭",
        ],
    ),
    (
        (Sweet, "Crunchy & Crispy"),
        [
            "Apple slices with peanut butter 🍎",
            "Granola with dried fruit 🌾",
            "Rice cakes with almond butter & banana 🍌",
        ],
    ),
    (
        (Sweet, "Chewy"),
        [
            "Dates stuffed with nut butter 🌴",
            "Oat energy balls with honey 🍯",
            "Dried mango strips (no added sugar) 🥭",
        ],
    ),
    (
        (Sweet, "Fluffy & Airy"),
        [
            "Whole-grain pancakes with fresh fruit 🥞",
            "Steamed pau with red bean filling 🫓",
            "Fruit smoothie bowl topped with granola 🍓",
        ],
    ),
    (
        (Sweet, "Juicy & Wet"),
        [
            "Fresh lychee or longan 🍈",
            "Watermelon with a pinch of salt 🍉",
            "Frozen grapes as a cool snack 🍇",
        ],
    ),
    (
        (Salty, "Crunchy & Crispy"),
        [
            "Roasted edamame with sea salt 🫘",
            "Air-popped popcorn lightly salted 🍿",
            "Seaweed crisps (lower fat than chips) 🌿",
        ],
    ),
    (
        (Salty, "Soft & Creamy"),
        [
            "Edamame hummus with veggie sticks 🥦",
            "Miso soup with tofu & wakame 🍲",
            "Avocado on wholegrain toast 🥑",
        ],
    ),
    (
        (Salty, "Chewy"),
        [
            "Wholegrain pita with tzatziki 🫓",
            "Brown rice onigiri with pickled plum 🍙",
            "Baked pretzels with low-salt dip 🥨",
        ],
    ),
    (
        (Salty, "Juicy & Wet"),
        [
            "Cucumber with light soy dipping sauce 🥒",
            "Edamame pods straight from the bag 🫘",
            "Cherry tomatoes with a pinch of sea salt 🍅",
        ],
    ),
    (
        (Salty, "Fluffy & Airy"),
        [
            "Wholegrain crackers with cottage cheese 🧀",
            "Steamed egg with light soy sauce 🥚",
            "Low-sodium multigrain rice cakes 🌾",
        ],
    ),
    (
        (Sour, "Juicy & Wet"),
        [
            "Fresh kiwi or passion fruit 🥝",
            "Pomelo segments (tangy & refreshing) 🍊",
            "Homemade lemon barley water 🍋",
        ],
    ),
    (
        (Sour, "Crunchy & Crispy"),
        [
            "Green mango salad (rojak-style) 🥭",
            "Pickled cucumber sticks 🥒",
            "Kimchi on wholegrain rice crackers 🌶️",
        ],
    ),
    (
        (Sour, "Soft & Creamy"),
        [
            "Plain yogurt with squeeze of lime 🍋",
            "Passion fruit yogurt parfait 🥝",
            "Chilled tofu with vinegar dressing 🍃",
        ],
    ),
    (
        (Sour, "Chewy"),
        [
            "Tamarind-glazed tempeh strips 🌿",
            "Yogurt-marinated chicken skewers 🍢",
            "Wholegrain sourdough with hummus 🫓",
        ],
    ),
    (
        (Sour, "Fluffy & Airy"),
        [
            "Lemon ricotta pancakes with berries 🍋",
            "Sourdough toast with avocado & lime 🥑",
            "Steamed fish with lemon & herbs 🐟",
        ],
    ),
    (
        (Umami, "Soft & Creamy"),
        [
            "Silken tofu with ponzu sauce 🍃",
            "Steamed egg custard (chawanmushi) 🥚",
            "Mushroom miso soup 🍄",
        ],
    ),
    (
        (Umami, "Crunchy & Crispy"),
        [
            "Baked tempeh chips 🌿",
            "Roasted mushroom crisps 🍄",
            "Edamame & nori rice crackers 🌾",
        ],
    ),
    (
        (Umami, "Chewy"),
        [
            "Soba noodles with dashi broth 🍜",
            "Brown rice with furikake seasoning 🍙",
            "Mushroom & tofu stir-fry on brown rice 🍄",
        ],
    ),
    (
        (Umami, "Juicy & Wet"),
        [
            "Clear mushroom broth soup 🍲",
            "Steamed clams or mussels 🦪",
            "Tomato-based vegetable broth 🍅",
        ],
    ),
    (
        (Umami, "Fluffy & Airy"),
        [
            "Steamed bao with mushroom filling 🫓",
            "Fluffy Japanese-style egg omelette 🥚",
            "Soft tofu with bonito flakes & soy 🍃",
        ],
    ),
    (
        (Crunchy, "Crunchy & Crispy"),
        [
            "Baked kale chips 🥬",
            "Roasted chickpeas (spiced) 🫘",
            "Mixed nuts & seeds trail mix 🌰",
        ],
    ),
    (
        (Crunchy, "Chewy"),
        [
            "Celery & carrot sticks with hummus 🥕",
            "Whole almonds with dark chocolate 🍫",
            "Toasted wholegrain crispbread 🌾",
        ],
    ),
    (
        (Crunchy, "Soft & Creamy"),
        [
            "Veggie sticks with guacamole 🥑",
            "Apple slices with yogurt dip 🍎",
            "Cucumber rounds with cream cheese 🥒",
        ],
    ),
    (
        (Crunchy, "Juicy & Wet"),
        [
            "Jicama (bangkuang) sticks with lime 🌿",
            "Water chestnuts stir-fried lightly 🌱",
            "Lotus root chips (baked) 🌸",
        ],
    ),
    (
        (Crunchy, "Fluffy & Airy"),
        [
            "Rice crackers with avocado 🌾",
            "Baked wholegrain puffs 🫧",
            "Air-popped corn dusted with nutritional yeast 🍿",
        ],
    ),
    (
        (Adventurous, "Crunchy & Crispy"),
        [
            "Oven-baked cricket protein snacks 🦗",
            "Roasted lotus seeds 🌸",
            "Spirulina-dusted popcorn 🌿",
        ],
    ),
    (
        (Adventurous, "Soft & Creamy"),
        [
            "Jackfruit pulled 'pork' tacos 🌮",
            "Purple sweet potato hummus 💜",
            "Fermented foods sampler — kimchi, miso, kefir 🥬",
        ],
    ),
    (
        (Adventurous, "Chewy"),
        [
            "Açaí bowl with exotic toppings 🫐",
            "Kelp noodle salad 🌿",
            "Tempeh rendang on brown rice 🍛",
        ],
    ),
    (
        (Adventurous, "Juicy & Wet"),
        [
            "Dragon fruit bowl 🐉",
            "Starfruit & lime juice cooler ⭐",
            "Pomegranate & rose water smoothie 🌹",
        ],
    ),
    (
        (Adventurous, "Fluffy & Airy"),
        [
            "Pandan chiffon cake (naturally green!) 🌿",
            "Blue pea flower steamed buns 💙",
            "Matcha soft-serve with black sesame 🍵",
        ],
    ),
];

/// Generic suggestions when no table entry matches the dominant dimension.
pub static GENERIC_SUBSTITUTIONS: [&str; 3] = [
    "More colourful fruits and vegetables 🌈",
    "Wholegrain versions of your favourite foods 🌾",
    "Water or low-sugar drinks instead of sodas 💧",
];

// ---------------------------------------------------------------------------
// Fun facts
// ---------------------------------------------------------------------------

/// Report fun fact per dominant dimension.
pub static FUN_FACTS: &[(Dimension, &str)] = &[
    (
        Sweet,
        "Bananas are berries, but strawberries are NOT! Botanically, a banana counts as a \
         berry because it develops from a single flower.",
    ),
    (
        Salty,
        "Your tongue has about 10,000 taste buds! Salty taste helps us detect minerals that \
         our bodies need to function.",
    ),
    (
        Sour,
        "Sour taste comes from acids. Vitamin C — the healthy stuff in fruits — is actually \
         ascorbic ACID, which is why citrus tastes tangy!",
    ),
    (
        Umami,
        "Umami was only officially named in 1908 by Japanese scientist Kikunae Ikeda. It \
         comes from glutamate, found in mushrooms, seaweed and cheese.",
    ),
    (
        Crunchy,
        "The sound of crunchiness actually affects how we taste food! Scientists found \
         people rate crisps as tastier when they hear the crunch louder.",
    ),
    (
        Adventurous,
        "The world has over 20,000 edible plant species — but only about 200 are commonly \
         eaten. You have a whole world of flavours to explore!",
    ),
];

/// Fallback fact when the dominant dimension has no entry.
pub static GENERIC_FUN_FACT: &str =
    "Every person's taste is unique — no two Flavour DNA profiles are exactly the same!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dimension_has_an_avatar() {
        for dim in Dimension::ALL {
            assert!(
                AVATAR_IDENTITIES.iter().any(|(d, _)| *d == dim),
                "missing avatar for {dim}"
            );
        }
    }

    #[test]
    fn test_every_dimension_has_substitutions() {
        for dim in Dimension::ALL {
            assert!(
                SUBSTITUTIONS.iter().any(|((d, _), _)| *d == dim),
                "missing substitutions for {dim}"
            );
        }
    }

    #[test]
    fn test_every_dimension_has_a_fun_fact() {
        for dim in Dimension::ALL {
            assert!(FUN_FACTS.iter().any(|(d, _)| *d == dim));
        }
    }

    #[test]
    fn test_neophobia_weights_stay_within_band_maximum() {
        // The three weighted fields cap out at 3 + 3 + 2 = 8.
        let max: u8 = NEOPHOBIA_WEIGHTS
            .iter()
            .map(|(_, entries)| entries.iter().map(|(_, w)| *w).max().unwrap_or(0))
            .sum();
        assert_eq!(max, 8);
    }

    #[test]
    fn test_dimension_weights_reference_known_fields() {
        let known = [
            crate::survey::fields::FLAVOUR,
            crate::survey::fields::TEXTURE,
            crate::survey::fields::SNACK,
            crate::survey::fields::TRIED_NEW,
            crate::survey::fields::NEW_FOOD_REACTION,
            crate::survey::fields::SUBSTITUTE_WILLINGNESS,
        ];
        for weights in DIMENSION_WEIGHTS {
            assert!(known.contains(&weights.field));
        }
    }
}

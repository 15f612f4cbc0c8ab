use forkcast_shared::SpiceLevel;

use crate::text::KeywordFamily;

/// One spice tier: its keyword list and the points each matched keyword adds.
#[derive(Debug)]
pub struct SpiceTier {
    pub level: SpiceLevel,
    pub points: u32,
    pub family: KeywordFamily,
}

pub static SPICE_TIERS: [SpiceTier; 4] = [
    SpiceTier {
        level: SpiceLevel::Mild,
        points: 1,
        family: KeywordFamily::substring(
            "spice_mild",
            &["mild", "black pepper", "white pepper", "paprika", "ginger"],
        ),
    },
    SpiceTier {
        level: SpiceLevel::Medium,
        points: 3,
        family: KeywordFamily::substring(
            "spice_medium",
            &[
                "chili powder",
                "chilli powder",
                "cayenne",
                "jalapeno",
                "jalapeño",
                "red pepper flakes",
                "chipotle",
                "sriracha",
                "curry powder",
                "poblano",
            ],
        ),
    },
    SpiceTier {
        level: SpiceLevel::Spicy,
        points: 5,
        family: KeywordFamily::substring(
            "spice_spicy",
            &[
                "habanero",
                "serrano",
                "thai chili",
                "bird's eye",
                "hot sauce",
                "gochujang",
                "harissa",
                "sambal",
                "chili oil",
            ],
        ),
    },
    SpiceTier {
        level: SpiceLevel::VerySpicy,
        points: 8,
        family: KeywordFamily::substring(
            "spice_very_spicy",
            &[
                "ghost pepper",
                "scotch bonnet",
                "carolina reaper",
                "vindaloo",
                "phaal",
                "naga",
            ],
        ),
    },
];

/// Generic heat words. Whole-word so "preheat" and "shot" do not count.
pub static HEAT_WORDS: KeywordFamily =
    KeywordFamily::whole_word("heat_words", &["hot", "spicy", "heat"]);

pub static SPICY_CUISINES: KeywordFamily = KeywordFamily::substring(
    "spicy_cuisines",
    &[
        "thai",
        "indian",
        "mexican",
        "sichuan",
        "szechuan",
        "hunan",
        "korean",
        "cajun",
        "ethiopian",
        "jamaican",
        "caribbean",
        "malaysian",
        "indonesian",
    ],
);

pub static COMPLEX_TECHNIQUES: KeywordFamily = KeywordFamily::substring(
    "complex_techniques",
    &[
        "sous vide",
        "sous-vide",
        "flambé",
        "flambe",
        "fermentation",
        "fermented",
        "tempering",
        "confit",
        "emulsify",
        "laminate",
        "clarified",
        "soufflé",
        "souffle",
        "spherification",
        "smoking",
        "curing",
    ],
);

pub static INTERMEDIATE_TECHNIQUES: KeywordFamily = KeywordFamily::substring(
    "intermediate_techniques",
    &[
        "sauté",
        "saute",
        "braise",
        "poach",
        "sear",
        "blanch",
        "deglaze",
        "caramelize",
        "reduce",
        "knead",
        "marinate",
        "roast",
        "fold in",
        "julienne",
    ],
);

pub static WHOLE_FOODS: KeywordFamily = KeywordFamily::substring(
    "whole_foods",
    &[
        "quinoa",
        "vegetable",
        "fresh",
        "olive oil",
        "spinach",
        "kale",
        "broccoli",
        "salmon",
        "lentil",
        "chickpea",
        "bean",
        "brown rice",
        "oats",
        "avocado",
        "berries",
        "sweet potato",
        "tomato",
        "herbs",
        "whole grain",
        "whole wheat",
        "greens",
        "tofu",
        "walnut",
        "almond",
        "seeds",
        "greek yogurt",
        "chicken breast",
        "garlic",
        "onion",
        "carrot",
        "bell pepper",
        "zucchini",
        "cauliflower",
        "mushroom",
    ],
);

pub static PROCESSED_FOODS: KeywordFamily = KeywordFamily::substring(
    "processed_foods",
    &[
        "processed",
        "deep fried",
        "deep-fried",
        "fried",
        "bacon",
        "sausage",
        "hot dog",
        "margarine",
        "shortening",
        "corn syrup",
        "artificial",
        "instant",
        "canned",
        "packaged",
        "white bread",
        "soda",
        "candy",
        "frosting",
        "hydrogenated",
        "nugget",
        "chips",
        "lard",
    ],
);

pub static SUGAR_INDICATORS: KeywordFamily = KeywordFamily::substring(
    "sugar_indicators",
    &[
        "sugar",
        "honey",
        "syrup",
        "caramel",
        "chocolate",
        "candy",
        "frosting",
        "sweetened",
        "molasses",
        "agave",
        "jam",
        "condensed milk",
        "icing",
        "marshmallow",
    ],
);

pub static SODIUM_INDICATORS: KeywordFamily = KeywordFamily::substring(
    "sodium_indicators",
    &[
        "salt",
        "soy sauce",
        "bacon",
        "cheese",
        "pickle",
        "olives",
        "anchov",
        "bouillon",
        "broth",
        "stock",
        "cured",
        "sausage",
        "salami",
        "fish sauce",
        "miso",
        "prosciutto",
        "parmesan",
        "capers",
        "teriyaki",
    ],
);

/// Title keywords that mark a recipe as a breakfast dish when it carries no
/// explicit meal type.
pub static BREAKFAST_WORDS: KeywordFamily = KeywordFamily::whole_word(
    "breakfast_words",
    &[
        "breakfast",
        "pancake",
        "pancakes",
        "omelette",
        "omelet",
        "porridge",
        "granola",
        "waffle",
        "waffles",
        "brunch",
    ],
);

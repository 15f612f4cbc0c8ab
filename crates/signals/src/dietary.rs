use forkcast_shared::DietaryRestriction;

use crate::text::{KeywordFamily, RecipeText};

const MEAT_AND_FISH: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "lamb",
    "veal",
    "turkey",
    "duck",
    "goose",
    "venison",
    "bacon",
    "ham",
    "sausage",
    "salami",
    "pepperoni",
    "prosciutto",
    "chorizo",
    "steak",
    "meat",
    "meatballs",
    "fish",
    "salmon",
    "tuna",
    "cod",
    "tilapia",
    "halibut",
    "trout",
    "sardines",
    "anchovy",
    "anchovies",
    "shrimp",
    "prawn",
    "prawns",
    "crab",
    "lobster",
    "scallop",
    "scallops",
    "clam",
    "clams",
    "mussel",
    "mussels",
    "oyster",
    "oysters",
    "gelatin",
    "lard",
    "fish sauce",
];

const VEGAN_EXTRA: &[&str] = &[
    "milk",
    "cheese",
    "butter",
    "cream",
    "yogurt",
    "yoghurt",
    "egg",
    "eggs",
    "honey",
    "ghee",
    "whey",
    "casein",
    "mayonnaise",
    "buttermilk",
];

const GLUTEN: &[&str] = &[
    "wheat",
    "flour",
    "bread",
    "breadcrumbs",
    "pasta",
    "spaghetti",
    "noodles",
    "barley",
    "rye",
    "couscous",
    "semolina",
    "seitan",
    "bulgur",
    "spelt",
    "farro",
    "malt",
    "soy sauce",
    "croutons",
    "tortilla",
];

const DAIRY: &[&str] = &[
    "milk",
    "cheese",
    "butter",
    "cream",
    "yogurt",
    "yoghurt",
    "ghee",
    "whey",
    "casein",
    "buttermilk",
    "ricotta",
    "mozzarella",
    "parmesan",
    "cheddar",
    "feta",
    "mascarpone",
];

const NUTS: &[&str] = &[
    "almond",
    "almonds",
    "walnut",
    "walnuts",
    "pecan",
    "pecans",
    "cashew",
    "cashews",
    "pistachio",
    "pistachios",
    "hazelnut",
    "hazelnuts",
    "macadamia",
    "peanut",
    "peanuts",
    "pine nuts",
    "praline",
    "nutella",
];

const SHELLFISH: &[&str] = &[
    "shrimp",
    "prawn",
    "prawns",
    "crab",
    "lobster",
    "clam",
    "clams",
    "mussel",
    "mussels",
    "oyster",
    "oysters",
    "scallop",
    "scallops",
    "crawfish",
    "crayfish",
    "langoustine",
];

/// Simplified: pork products and shellfish only. Full kosher rules (meat and
/// dairy separation, certification) are not modelled.
const KOSHER: &[&str] = &[
    "pork",
    "bacon",
    "ham",
    "lard",
    "prosciutto",
    "pepperoni",
    "chorizo",
    "shrimp",
    "prawn",
    "prawns",
    "crab",
    "lobster",
    "clam",
    "clams",
    "mussel",
    "mussels",
    "oyster",
    "oysters",
    "scallop",
    "scallops",
];

/// Simplified: pork products, gelatin and alcohol.
const HALAL: &[&str] = &[
    "pork",
    "bacon",
    "ham",
    "lard",
    "prosciutto",
    "pepperoni",
    "salami",
    "chorizo",
    "gelatin",
    "wine",
    "beer",
    "rum",
    "bourbon",
    "brandy",
    "sake",
    "mirin",
];

const PALEO: &[&str] = &[
    "wheat",
    "flour",
    "bread",
    "pasta",
    "rice",
    "oats",
    "corn",
    "beans",
    "lentils",
    "chickpeas",
    "peanut",
    "peanuts",
    "soy",
    "tofu",
    "milk",
    "cheese",
    "yogurt",
    "sugar",
];

const KETO: &[&str] = &[
    "sugar",
    "rice",
    "pasta",
    "bread",
    "potato",
    "potatoes",
    "flour",
    "oats",
    "honey",
    "maple syrup",
    "corn",
    "banana",
    "quinoa",
    "beans",
    "noodles",
];

const HIGH_SODIUM: &[&str] = &[
    "salt",
    "soy sauce",
    "bacon",
    "ham",
    "anchovy",
    "anchovies",
    "capers",
    "olives",
    "pickles",
    "bouillon",
    "parmesan",
    "salami",
    "prosciutto",
    "miso",
    "fish sauce",
];

const HIGH_CARB: &[&str] = &[
    "sugar",
    "rice",
    "pasta",
    "bread",
    "potato",
    "potatoes",
    "flour",
    "noodles",
    "tortilla",
    "oats",
    "honey",
    "corn",
];

static VEGETARIAN_VIOLATORS: KeywordFamily =
    KeywordFamily::whole_word("vegetarian", MEAT_AND_FISH);
static VEGAN_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("vegan", VEGAN_TERMS);
static GLUTEN_FREE_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("gluten_free", GLUTEN);
static DAIRY_FREE_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("dairy_free", DAIRY);
static NUT_FREE_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("nut_free", NUTS);
static SHELLFISH_FREE_VIOLATORS: KeywordFamily =
    KeywordFamily::whole_word("shellfish_free", SHELLFISH);
static KOSHER_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("kosher", KOSHER);
static HALAL_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("halal", HALAL);
static PALEO_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("paleo", PALEO);
static KETO_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("keto", KETO);
static LOW_SODIUM_VIOLATORS: KeywordFamily =
    KeywordFamily::whole_word("low_sodium", HIGH_SODIUM);
static LOW_CARB_VIOLATORS: KeywordFamily = KeywordFamily::whole_word("low_carb", HIGH_CARB);

/// Forbidden terms for one restriction, tested with whole-word matching.
pub fn violator_family(restriction: DietaryRestriction) -> &'static KeywordFamily {
    match restriction {
        DietaryRestriction::Vegetarian => &VEGETARIAN_VIOLATORS,
        DietaryRestriction::Vegan => &VEGAN_VIOLATORS,
        DietaryRestriction::GlutenFree => &GLUTEN_FREE_VIOLATORS,
        DietaryRestriction::DairyFree => &DAIRY_FREE_VIOLATORS,
        DietaryRestriction::NutFree => &NUT_FREE_VIOLATORS,
        DietaryRestriction::ShellfishFree => &SHELLFISH_FREE_VIOLATORS,
        DietaryRestriction::Kosher => &KOSHER_VIOLATORS,
        DietaryRestriction::Halal => &HALAL_VIOLATORS,
        DietaryRestriction::Paleo => &PALEO_VIOLATORS,
        DietaryRestriction::Keto => &KETO_VIOLATORS,
        DietaryRestriction::LowSodium => &LOW_SODIUM_VIOLATORS,
        DietaryRestriction::LowCarb => &LOW_CARB_VIOLATORS,
    }
}

/// Vegan forbids everything vegetarian does plus animal by-products.
const VEGAN_TERMS: &[&str] = &concat_terms::<{ MEAT_AND_FISH.len() + VEGAN_EXTRA.len() }>(
    MEAT_AND_FISH,
    VEGAN_EXTRA,
);

const fn concat_terms<const N: usize>(
    first: &[&'static str],
    second: &[&'static str],
) -> [&'static str; N] {
    let mut out = [""; N];
    let mut i = 0;
    while i < first.len() {
        out[i] = first[i];
        i += 1;
    }
    let mut j = 0;
    while j < second.len() {
        out[i + j] = second[j];
        j += 1;
    }
    out
}

/// First forbidden term of `restriction` present in `text`, if any.
pub fn find_violation(restriction: DietaryRestriction, text: &RecipeText) -> Option<&'static str> {
    violator_family(restriction).first_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantArray;

    #[test]
    fn test_every_restriction_has_terms() {
        for restriction in DietaryRestriction::VARIANTS {
            assert!(
                !violator_family(*restriction).keywords.is_empty(),
                "{restriction} has no forbidden terms"
            );
        }
    }

    #[test]
    fn test_vegan_includes_vegetarian_terms() {
        let vegan = violator_family(DietaryRestriction::Vegan);
        for term in MEAT_AND_FISH {
            assert!(vegan.keywords.contains(term));
        }
        assert!(vegan.keywords.contains(&"honey"));
    }

    #[test]
    fn test_find_violation_whole_word() {
        let text = RecipeText::new(["Butterfly pasta", "tomato", "basil"]);
        assert_eq!(find_violation(DietaryRestriction::DairyFree, &text), None);
        assert_eq!(
            find_violation(DietaryRestriction::GlutenFree, &text),
            Some("pasta")
        );
    }

    #[test]
    fn test_find_violation_reports_first_table_term() {
        let text = RecipeText::new(["cheese", "milk"]);
        assert_eq!(
            find_violation(DietaryRestriction::Vegan, &text),
            Some("milk")
        );
    }
}

/// Grams per millilitre. More specific names come first so "brown sugar" is
/// found before "sugar".
const DENSITIES: &[(&str, f64)] = &[
    ("powdered sugar", 0.56),
    ("icing sugar", 0.56),
    ("brown sugar", 0.93),
    ("maple syrup", 1.32),
    ("heavy cream", 0.99),
    ("sour cream", 1.01),
    ("water", 1.0),
    ("cocoa", 0.42),
    ("flour", 0.53),
    ("sugar", 0.85),
    ("butter", 0.96),
    ("honey", 1.42),
    ("oil", 0.92),
    ("milk", 1.03),
    ("cream", 0.99),
    ("yogurt", 1.03),
    ("yoghurt", 1.03),
    ("rice", 0.78),
    ("oats", 0.38),
    ("salt", 1.2),
];

/// Density of an ingredient, matched by the first table entry its lower-cased
/// name contains.
pub fn density_g_per_ml(ingredient: &str) -> Option<f64> {
    let name = ingredient.to_lowercase();

    DENSITIES
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, density)| *density)
}

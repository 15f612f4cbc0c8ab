use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::unit::{Unit, normalize_unit};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    pub fn piece() -> Self {
        Self::new(1.0, Unit::Piece)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedIngredient {
    pub quantity: Quantity,
    /// Normalised ingredient name, see [`ingredient_base_name`].
    pub name: String,
    /// Name of the pattern that matched, `None` for the `1 piece` fallback.
    pub pattern: Option<&'static str>,
}

type Extractor = fn(&Captures<'_>) -> Option<(Quantity, String)>;

/// One entry of the ordered parser table. The first pattern whose regex
/// matches and whose extractor accepts the captures wins.
struct QuantityPattern {
    name: &'static str,
    regex: Regex,
    extract: Extractor,
}

impl QuantityPattern {
    fn new(name: &'static str, pattern: &str, extract: Extractor) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
            extract,
        }
    }
}

static PATTERNS: LazyLock<Vec<QuantityPattern>> = LazyLock::new(|| {
    vec![
        QuantityPattern::new(
            "mixed_fraction_unit",
            r"^(\d+)\s+(\d+)/(\d+)\s*([a-z]+\.?(?:\s+oz)?)\s+(.+)$",
            |c| {
                let amount = mixed(&c[1], &c[2], &c[3])?;
                with_unit(amount, &c[4], &c[5])
            },
        ),
        QuantityPattern::new(
            "fraction_unit",
            r"^(\d+)/(\d+)\s*([a-z]+\.?(?:\s+oz)?)\s+(.+)$",
            |c| {
                let amount = fraction(&c[1], &c[2])?;
                with_unit(amount, &c[3], &c[4])
            },
        ),
        QuantityPattern::new(
            "decimal_unit",
            r"^(\d*\.\d+)\s*([a-z]+\.?(?:\s+oz)?)\s+(.+)$",
            |c| with_unit(c[1].parse().ok()?, &c[2], &c[3]),
        ),
        QuantityPattern::new(
            "integer_unit",
            r"^(\d+)\s*([a-z]+\.?(?:\s+oz)?)\s+(.+)$",
            |c| with_unit(c[1].parse().ok()?, &c[2], &c[3]),
        ),
        QuantityPattern::new("bare_mixed_fraction", r"^(\d+)\s+(\d+)/(\d+)\s+(.+)$", |c| {
            Some((
                Quantity::new(mixed(&c[1], &c[2], &c[3])?, Unit::Piece),
                c[4].to_owned(),
            ))
        }),
        QuantityPattern::new("bare_integer", r"^(\d+)\s+(.+)$", |c| {
            Some((Quantity::new(c[1].parse().ok()?, Unit::Piece), c[2].to_owned()))
        }),
        QuantityPattern::new("bare_fraction", r"^(\d+)/(\d+)\s+(.+)$", |c| {
            Some((
                Quantity::new(fraction(&c[1], &c[2])?, Unit::Piece),
                c[3].to_owned(),
            ))
        }),
    ]
});

/// Extractor helper: accepts the captures only when `unit` is a known unit.
/// "2 eggs" therefore falls through to the bare-integer pattern.
fn with_unit(amount: f64, unit: &str, rest: &str) -> Option<(Quantity, String)> {
    let unit = normalize_unit(unit)?;
    Some((Quantity::new(amount, unit), rest.to_owned()))
}

fn fraction(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;

    if denominator == 0.0 {
        return None;
    }

    Some(numerator / denominator)
}

fn mixed(whole: &str, numerator: &str, denominator: &str) -> Option<f64> {
    let whole: f64 = whole.parse().ok()?;
    Some(whole + fraction(numerator, denominator)?)
}

/// Rewrites unicode vulgar fractions to ASCII, lower-cases and collapses
/// whitespace: "1½ Cups" becomes "1 1/2 cups".
fn prepare(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);

    for c in line.chars() {
        let ascii = match c {
            '½' => " 1/2",
            '⅓' => " 1/3",
            '⅔' => " 2/3",
            '¼' => " 1/4",
            '¾' => " 3/4",
            '⅛' => " 1/8",
            '⁄' => "/",
            _ => {
                out.extend(c.to_lowercase());
                continue;
            }
        };
        out.push_str(ascii);
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a free-text ingredient line into a quantity and a normalised name.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let prepared = prepare(line);

    for pattern in PATTERNS.iter() {
        let Some(captures) = pattern.regex.captures(&prepared) else {
            continue;
        };

        if let Some((quantity, rest)) = (pattern.extract)(&captures) {
            return ParsedIngredient {
                quantity,
                name: ingredient_base_name(&rest),
                pattern: Some(pattern.name),
            };
        }
    }

    ParsedIngredient {
        quantity: Quantity::piece(),
        name: ingredient_base_name(&prepared),
        pattern: None,
    }
}

/// Lower-cased ingredient name without parenthetical notes, without anything
/// after the first comma and without a leading "of".
pub fn ingredient_base_name(text: &str) -> String {
    let mut name = String::with_capacity(text.len());
    let mut depth = 0usize;

    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => name.extend(c.to_lowercase()),
            _ => {}
        }
    }

    let name = name.split(',').next().unwrap_or_default();
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    match name.strip_prefix("of ") {
        Some(rest) => rest.to_owned(),
        None => name,
    }
}

/// Base name of an ingredient line with its quantity and unit removed.
pub fn ingredient_name(line: &str) -> String {
    parse_ingredient(line).name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_rewrites_vulgar_fractions() {
        assert_eq!(prepare("1½ Cups  Flour"), "1 1/2 cups flour");
        assert_eq!(prepare("¾ tsp salt"), "3/4 tsp salt");
    }

    #[test]
    fn test_pattern_order() {
        let cases = [
            ("1 1/2 cups flour", 1.5, Unit::Cup, "flour", "mixed_fraction_unit"),
            ("1/2 tsp salt", 0.5, Unit::Tsp, "salt", "fraction_unit"),
            ("0.5 kg potatoes", 0.5, Unit::Kg, "potatoes", "decimal_unit"),
            ("200g noodles", 200.0, Unit::G, "noodles", "integer_unit"),
            ("2 tbsp. olive oil", 2.0, Unit::Tbsp, "olive oil", "integer_unit"),
            ("8 fl oz water", 8.0, Unit::FlOz, "water", "integer_unit"),
            ("1 1/2 onions", 1.5, Unit::Piece, "onions", "bare_mixed_fraction"),
            ("3 eggs", 3.0, Unit::Piece, "eggs", "bare_integer"),
            ("1/2 onion, diced", 0.5, Unit::Piece, "onion", "bare_fraction"),
        ];

        for (line, amount, unit, name, pattern) in cases {
            let parsed = parse_ingredient(line);
            assert_eq!(parsed.quantity, Quantity::new(amount, unit), "{line}");
            assert_eq!(parsed.name, name, "{line}");
            assert_eq!(parsed.pattern, Some(pattern), "{line}");
        }
    }

    #[test]
    fn test_bare_mixed_fraction_keeps_fraction() {
        let parsed = parse_ingredient("2½ Onions, sliced");

        assert_eq!(parsed.quantity, Quantity::new(2.5, Unit::Piece));
        assert_eq!(parsed.name, "onions");
        assert_eq!(parsed.pattern, Some("bare_mixed_fraction"));
    }

    #[test]
    fn test_unparsable_line_is_one_piece() {
        let parsed = parse_ingredient("Salt and pepper to taste");

        assert_eq!(parsed.quantity, Quantity::piece());
        assert_eq!(parsed.name, "salt and pepper to taste");
        assert_eq!(parsed.pattern, None);
    }

    #[test]
    fn test_zero_denominator_falls_through() {
        let parsed = parse_ingredient("1/0 cup milk");
        assert_eq!(parsed.pattern, None);
        assert_eq!(parsed.quantity, Quantity::piece());
    }

    #[test]
    fn test_base_name_strips_notes() {
        assert_eq!(
            ingredient_base_name("Chicken Thighs (boneless, skinless), cut into strips"),
            "chicken thighs"
        );
        assert_eq!(ingredient_base_name("of  Parmesan"), "parmesan");
        assert_eq!(ingredient_name("2 cups of rice"), "rice");
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::density::density_g_per_ml;
use crate::parse::{Quantity, parse_ingredient};
use crate::unit::{Dimension, Unit};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedIngredient {
    pub name: String,
    pub quantity: Quantity,
    /// At least one quantity had no conversion path and was added as-is.
    pub approximate: bool,
}

/// Converts `quantity` into `target` for the named ingredient. Volume and
/// weight convert linearly within their dimension and through the density
/// table across them.
pub fn convert(ingredient: &str, quantity: Quantity, target: Unit) -> Option<f64> {
    if quantity.unit == target {
        return Some(quantity.amount);
    }

    let from = quantity.unit.base_factor()?;
    let to = target.base_factor()?;
    let base = quantity.amount * from;

    match (quantity.unit.dimension(), target.dimension()) {
        (a, b) if a == b => Some(base / to),
        (Dimension::Volume, Dimension::Weight) => {
            let density = density_g_per_ml(ingredient)?;
            Some(base * density / to)
        }
        (Dimension::Weight, Dimension::Volume) => {
            let density = density_g_per_ml(ingredient)?;
            Some(base / density / to)
        }
        _ => None,
    }
}

/// The unit occurring most often, earliest first on ties.
fn most_frequent_unit(quantities: &[Quantity]) -> Option<Unit> {
    let mut counts: Vec<(Unit, usize)> = Vec::new();

    for quantity in quantities {
        match counts.iter_mut().find(|(unit, _)| *unit == quantity.unit) {
            Some((_, count)) => *count += 1,
            None => counts.push((quantity.unit, 1)),
        }
    }

    let max = counts.iter().map(|(_, count)| *count).max()?;
    counts
        .into_iter()
        .find(|(_, count)| *count == max)
        .map(|(unit, _)| unit)
}

/// Sums quantities of one ingredient in its most frequent unit. Quantities
/// with no conversion path are added naively and flag the result as
/// approximate.
pub fn aggregate(name: &str, quantities: &[Quantity]) -> Option<AggregatedIngredient> {
    let target = most_frequent_unit(quantities)?;
    let mut amount = 0.0;
    let mut approximate = false;

    for quantity in quantities {
        match convert(name, *quantity, target) {
            Some(converted) => amount += converted,
            None => {
                amount += quantity.amount;
                approximate = true;
            }
        }
    }

    Some(AggregatedIngredient {
        name: name.to_owned(),
        quantity: Quantity::new(amount, target),
        approximate,
    })
}

/// Parses every line, groups by normalised name and aggregates each group.
/// Results are sorted by name.
pub fn aggregate_lines<S: AsRef<str>>(lines: &[S]) -> Vec<AggregatedIngredient> {
    let mut groups: BTreeMap<String, Vec<Quantity>> = BTreeMap::new();

    for line in lines {
        let parsed = parse_ingredient(line.as_ref());
        if parsed.name.is_empty() {
            continue;
        }
        groups.entry(parsed.name).or_default().push(parsed.quantity);
    }

    groups
        .iter()
        .filter_map(|(name, quantities)| aggregate(name, quantities))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_volume_to_volume() {
        let ml = convert("milk", Quantity::new(1.0, Unit::Cup), Unit::Ml).unwrap();
        assert!(close(ml, 240.0));

        let tbsp = convert("milk", Quantity::new(2.0, Unit::Tsp), Unit::Tbsp).unwrap();
        assert!(close(tbsp, 2.0 / 3.0));
    }

    #[test]
    fn test_volume_to_weight_uses_density() {
        let grams = convert("flour", Quantity::new(1.0, Unit::Cup), Unit::G).unwrap();
        assert!(close(grams, 127.2));

        let cups = convert("sugar", Quantity::new(204.0, Unit::G), Unit::Cup).unwrap();
        assert!(close(cups, 1.0));

        assert_eq!(convert("chicken", Quantity::new(1.0, Unit::Cup), Unit::G), None);
        assert_eq!(convert("garlic", Quantity::new(1.0, Unit::Clove), Unit::G), None);
    }

    #[test]
    fn test_aggregate_uses_most_frequent_unit() {
        let result = aggregate(
            "milk",
            &[
                Quantity::new(240.0, Unit::Ml),
                Quantity::new(1.0, Unit::Cup),
                Quantity::new(2.0, Unit::Cup),
            ],
        )
        .unwrap();

        assert_eq!(result.quantity.unit, Unit::Cup);
        assert!(close(result.quantity.amount, 4.0));
        assert!(!result.approximate);
    }

    #[test]
    fn test_aggregate_without_path_is_approximate() {
        let result = aggregate(
            "garlic",
            &[Quantity::new(2.0, Unit::Clove), Quantity::new(1.0, Unit::Tsp)],
        )
        .unwrap();

        assert_eq!(result.quantity, Quantity::new(3.0, Unit::Clove));
        assert!(result.approximate);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate("anything", &[]), None);
    }
}

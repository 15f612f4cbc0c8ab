use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Volume,
    Weight,
    Count,
}

/// Canonical units. Spelling variants are folded in by [`normalize_unit`].
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Ml,
    L,
    Tsp,
    Tbsp,
    Cup,
    FlOz,
    Pint,
    Quart,
    G,
    Kg,
    Oz,
    Lb,
    Piece,
    Clove,
    Can,
    Pinch,
}

impl Unit {
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Ml
            | Unit::L
            | Unit::Tsp
            | Unit::Tbsp
            | Unit::Cup
            | Unit::FlOz
            | Unit::Pint
            | Unit::Quart => Dimension::Volume,
            Unit::G | Unit::Kg | Unit::Oz | Unit::Lb => Dimension::Weight,
            Unit::Piece | Unit::Clove | Unit::Can | Unit::Pinch => Dimension::Count,
        }
    }

    /// Factor to the dimension's base unit: millilitres for volume, grams for
    /// weight. Count units have none.
    pub fn base_factor(self) -> Option<f64> {
        let factor = match self {
            Unit::Ml => 1.0,
            Unit::L => 1000.0,
            Unit::Tsp => 5.0,
            Unit::Tbsp => 15.0,
            Unit::Cup => 240.0,
            Unit::FlOz => 30.0,
            Unit::Pint => 480.0,
            Unit::Quart => 960.0,
            Unit::G => 1.0,
            Unit::Kg => 1000.0,
            Unit::Oz => 28.35,
            Unit::Lb => 453.59,
            Unit::Piece | Unit::Clove | Unit::Can | Unit::Pinch => return None,
        };

        Some(factor)
    }
}

/// Folds a free-text unit spelling into a [`Unit`]. Case-insensitive, a
/// trailing period is ignored.
pub fn normalize_unit(raw: &str) -> Option<Unit> {
    let unit = raw.trim().trim_end_matches('.').to_lowercase();

    let unit = match unit.as_str() {
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Unit::Ml,
        "l" | "liter" | "liters" | "litre" | "litres" => Unit::L,
        "tsp" | "tsps" | "teaspoon" | "teaspoons" | "t" => Unit::Tsp,
        "tbsp" | "tbsps" | "tbs" | "tablespoon" | "tablespoons" | "tbl" => Unit::Tbsp,
        "cup" | "cups" | "c" => Unit::Cup,
        "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Unit::FlOz,
        "pint" | "pints" | "pt" => Unit::Pint,
        "quart" | "quarts" | "qt" => Unit::Quart,
        "g" | "gram" | "grams" | "gr" => Unit::G,
        "kg" | "kilogram" | "kilograms" | "kilo" | "kilos" => Unit::Kg,
        "oz" | "ounce" | "ounces" => Unit::Oz,
        "lb" | "lbs" | "pound" | "pounds" => Unit::Lb,
        "piece" | "pieces" | "pc" | "pcs" | "whole" | "item" | "items" => Unit::Piece,
        "clove" | "cloves" => Unit::Clove,
        "can" | "cans" | "tin" | "tins" => Unit::Can,
        "pinch" | "pinches" => Unit::Pinch,
        _ => return None,
    };

    Some(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_synonyms() {
        assert_eq!(normalize_unit("Tablespoons"), Some(Unit::Tbsp));
        assert_eq!(normalize_unit("tbsp."), Some(Unit::Tbsp));
        assert_eq!(normalize_unit("LBS"), Some(Unit::Lb));
        assert_eq!(normalize_unit("litres"), Some(Unit::L));
        assert_eq!(normalize_unit("whole"), Some(Unit::Piece));
        assert_eq!(normalize_unit("eggs"), None);
        assert_eq!(normalize_unit(""), None);
    }

    #[test]
    fn test_every_volume_and_weight_unit_has_a_factor() {
        for unit in Unit::VARIANTS {
            match unit.dimension() {
                Dimension::Count => assert_eq!(unit.base_factor(), None),
                _ => assert!(unit.base_factor().is_some(), "{unit} has no factor"),
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit::FlOz.to_string(), "fl_oz");
        assert_eq!(Unit::Tbsp.as_ref(), "tbsp");
    }
}

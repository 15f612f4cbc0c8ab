use forkcast_shared::DietaryRestriction;
use serde::{Deserialize, Serialize};

/// Why a recipe was structurally ineligible for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VetoReason {
    BannedIngredient {
        ingredient: String,
    },
    DietaryRestriction {
        restriction: DietaryRestriction,
        term: String,
    },
}

/// Outcome of a scorer that can veto.
///
/// A vetoed recipe still reports a numeric score of 0, so callers that only
/// look at the number keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Verdict {
    Scored(u8),
    Vetoed(VetoReason),
}

impl Verdict {
    pub fn value(&self) -> u8 {
        match self {
            Verdict::Scored(value) => *value,
            Verdict::Vetoed(_) => 0,
        }
    }

    pub fn is_vetoed(&self) -> bool {
        matches!(self, Verdict::Vetoed(_))
    }

    pub fn veto_reason(&self) -> Option<&VetoReason> {
        match self {
            Verdict::Scored(_) => None,
            Verdict::Vetoed(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vetoed_value_is_zero() {
        let verdict = Verdict::Vetoed(VetoReason::BannedIngredient {
            ingredient: "peanut".to_owned(),
        });

        assert_eq!(verdict.value(), 0);
        assert!(verdict.is_vetoed());
        assert_eq!(Verdict::Scored(72).value(), 72);
    }

    #[test]
    fn test_verdict_json_shape() {
        let verdict = Verdict::Vetoed(VetoReason::DietaryRestriction {
            restriction: DietaryRestriction::Vegan,
            term: "milk".to_owned(),
        });
        let json = serde_json::to_value(&verdict).unwrap();

        assert_eq!(json["status"], "vetoed");
        assert_eq!(json["value"]["kind"], "dietary_restriction");
        assert_eq!(json["value"]["restriction"], "vegan");
    }
}

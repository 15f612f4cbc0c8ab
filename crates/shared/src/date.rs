use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use time::{OffsetDateTime, Weekday};

#[derive(
    EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// 05–11 morning, 12–16 afternoon, 17–20 evening, otherwise night.
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// Wall-clock context for Full Score. Always built from an explicit instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalContext {
    pub time_of_day: TimeOfDay,
    pub is_weekend: bool,
}

impl TemporalContext {
    pub fn from_datetime(at: OffsetDateTime) -> Self {
        Self {
            time_of_day: TimeOfDay::from_hour(at.hour()),
            is_weekend: matches!(at.weekday(), Weekday::Saturday | Weekday::Sunday),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_temporal_context_from_datetime() {
        let saturday_morning = TemporalContext::from_datetime(datetime!(2025-03-01 08:30 UTC));
        assert_eq!(saturday_morning.time_of_day, TimeOfDay::Morning);
        assert!(saturday_morning.is_weekend);

        let tuesday_night = TemporalContext::from_datetime(datetime!(2025-03-04 23:10 UTC));
        assert_eq!(tuesday_night.time_of_day, TimeOfDay::Night);
        assert!(!tuesday_night.is_weekend);
    }

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
    }
}

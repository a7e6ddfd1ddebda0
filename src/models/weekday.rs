//! Weekday bitmask for timetable applicability.
//!
//! A timetable carries a 7-bit mask encoding which days of the week it
//! applies to: Monday is bit 0 through Sunday at bit 6, so valid masks are
//! 1..=127 (Mon-Fri is 0b0011111 = 31).

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// 7-bit weekday mask, Monday = bit 0 ... Sunday = bit 6.
///
/// The zero mask ("never applies") and anything above 127 are construction
/// errors, so a `WeekdayMask` value always matches at least one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    /// All seven days set.
    pub const ALL: WeekdayMask = WeekdayMask(0b111_1111);

    /// Create a mask from its raw bit value.
    pub fn new(mask: u8) -> Result<Self, ValidationError> {
        if mask == 0 || mask > 0b111_1111 {
            return Err(ValidationError::InvalidMask { value: mask });
        }
        Ok(WeekdayMask(mask))
    }

    /// Encode a set of weekdays into a mask.
    ///
    /// Fails with `InvalidMask` for the empty set, mirroring `new(0)`.
    pub fn encode(days: &[Weekday]) -> Result<Self, ValidationError> {
        let mut mask = 0u8;
        for day in days {
            mask |= 1 << day.num_days_from_monday();
        }
        Self::new(mask)
    }

    /// Decode the mask back into the set of weekdays, Monday first.
    pub fn decode(&self) -> Vec<Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(|day| self.matches(*day))
        .collect()
    }

    /// Whether the bit for `weekday` is set.
    pub fn matches(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_monday()) != 0
    }

    /// Raw bit value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for WeekdayMask {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        WeekdayMask::new(value)
    }
}

impl From<WeekdayMask> for u8 {
    fn from(mask: WeekdayMask) -> Self {
        mask.0
    }
}

impl std::fmt::Display for WeekdayMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#09b}", self.0)
    }
}

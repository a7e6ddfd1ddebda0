//! System-wide holiday intervals during which no bells fire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{validate_name, ValidationError};
use crate::api::HolidayId;

/// A closed date interval suppressing all bell events, for every user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: HolidayId,
    pub name: String,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
}

impl Holiday {
    pub fn new(
        id: HolidayId,
        name: impl Into<String>,
        valid_from: NaiveDate,
        valid_until: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name("holiday name", &name, 1, 100)?;
        if valid_until < valid_from {
            return Err(ValidationError::InvalidWindow {
                valid_from,
                valid_until,
            });
        }
        Ok(Holiday {
            id,
            name,
            valid_from,
            valid_until,
        })
    }

    /// Whether `date` falls inside the interval (both bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && date <= self.valid_until
    }
}

/// Mutable fields of a holiday, used for both creation and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayDraft {
    pub name: String,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
}

impl HolidayDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("holiday name", &self.name, 1, 100)?;
        if self.valid_until < self.valid_from {
            return Err(ValidationError::InvalidWindow {
                valid_from: self.valid_from,
                valid_until: self.valid_until,
            });
        }
        Ok(())
    }
}

//! Public API surface for the backend.
//!
//! This file consolidates the identifier newtypes shared by the domain
//! models, the repository layer and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// User identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Timetable identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimetableId(pub i64);

/// Timetable event identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub i64);

/// Event template identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub i64);

/// Event template item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateItemId(pub i64);

/// Identifier grouping the events spawned by one template application.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateInstanceId(pub i64);

/// Holiday identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HolidayId(pub i64);

/// Sound identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SoundId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TimetableId {
    pub fn new(value: i64) -> Self {
        TimetableId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EventId {
    pub fn new(value: i64) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TemplateId {
    pub fn new(value: i64) -> Self {
        TemplateId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TemplateItemId {
    pub fn new(value: i64) -> Self {
        TemplateItemId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TemplateInstanceId {
    pub fn new(value: i64) -> Self {
        TemplateInstanceId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl HolidayId {
    pub fn new(value: i64) -> Self {
        HolidayId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl SoundId {
    pub fn new(value: i64) -> Self {
        SoundId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TimetableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TemplateItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TemplateInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for HolidayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
impl From<TimetableId> for i64 {
    fn from(id: TimetableId) -> Self {
        id.0
    }
}
impl From<SoundId> for i64 {
    fn from(id: SoundId) -> Self {
        id.0
    }
}

pub use crate::models::WeekdayMask;
pub use crate::resolver::{FiringInstruction, FiringPlan, PlanWarning};

//! Domain types for the vaccination registry.
//!
//! Dates of birth are calendar dates (`NaiveDate`); appointments carry a
//! wall-clock timestamp (`NaiveDateTime`) because the reminder window is
//! compared against "now" with time-of-day precision.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::RegistryError;

/// Input and display format for every calendar date in the registry.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A child's name as entered at registration.
///
/// Names are not unique. Lookups compare case-insensitively and the first
/// registered match wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChildName(pub String);

impl ChildName {
    /// Case-insensitive exact comparison against user input.
    pub fn matches(&self, query: &str) -> bool {
        self.0.to_lowercase() == query.to_lowercase()
    }
}

impl fmt::Display for ChildName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ChildName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChildName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A catalog vaccine. Catalog entries live for the whole process, so records
/// refer to them as `&'static Vaccine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vaccine {
    pub name: &'static str,
    pub diseases_prevented: &'static [&'static str],
    /// Minimum age in months at which the vaccine becomes due.
    pub recommended_age_months: i32,
}

impl Vaccine {
    /// Case-insensitive exact comparison against user input.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }

    /// `true` once a child of `age_months` has reached the recommended age.
    pub fn is_due_at(&self, age_months: i32) -> bool {
        age_months >= self.recommended_age_months
    }
}

impl fmt::Display for Vaccine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}; recommended at {} months)",
            self.name,
            self.diseases_prevented.join(", "),
            self.recommended_age_months
        )
    }
}

/// One scheduled appointment for a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VaccinationRecord {
    pub vaccine: &'static Vaccine,
    pub scheduled_for: NaiveDateTime,
}

impl VaccinationRecord {
    /// Appointment day rendered as `YYYY-MM-DD`.
    pub fn scheduled_date(&self) -> String {
        self.scheduled_for.format(DATE_FORMAT).to_string()
    }
}

/// A registered child and its appointments, in the order they were booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Child {
    pub name: ChildName,
    pub birthdate: NaiveDate,
    pub parent_name: String,
    pub contact: String,
    pub vaccination_records: Vec<VaccinationRecord>,
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (born {}, parent {}, contact {})",
            self.name,
            self.birthdate.format(DATE_FORMAT),
            self.parent_name,
            self.contact
        )
    }
}

// ---------------------------------------------------------------------------
// Query results
// ---------------------------------------------------------------------------

/// A child's age together with the catalog vaccines it is old enough for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccineSchedule<'a> {
    pub child: &'a Child,
    pub age_months: i32,
    pub due: Vec<&'static Vaccine>,
}

/// The result of booking an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appointment<'a> {
    pub child: &'a Child,
    pub record: VaccinationRecord,
}

/// An appointment falling inside the reminder window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reminder<'a> {
    pub child: &'a Child,
    pub vaccine: &'static Vaccine,
    pub scheduled_for: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Time offsets used when booking appointments and selecting reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSettings {
    /// Offset from "now" to the booked appointment.
    pub appointment_lead: Duration,
    /// Width of the half-open `[now, now + window)` reminder interval.
    pub reminder_window: Duration,
}

impl ScheduleSettings {
    pub fn from_days(appointment_lead_days: i64, reminder_window_days: i64) -> Self {
        Self {
            appointment_lead: Duration::days(appointment_lead_days),
            reminder_window: Duration::days(reminder_window_days),
        }
    }
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self::from_days(7, 1)
    }
}

// ---------------------------------------------------------------------------
// Input parsing
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` date typed by the user.
///
/// `field` names the prompt in the resulting [`RegistryError::InvalidInput`].
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, RegistryError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| RegistryError::InvalidInput {
        field,
        value: trimmed.to_owned(),
        reason: format!("expected YYYY-MM-DD ({e})"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

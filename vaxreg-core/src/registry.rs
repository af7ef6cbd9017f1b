//! In-memory vaccination registry.
//!
//! # Model
//!
//! ```text
//! Registry
//!   children   Vec<Child>          (registration order, names not unique)
//!   catalog    &'static [Vaccine]  (fixed, see crate::catalog)
//!   settings   ScheduleSettings    (appointment lead, reminder window)
//! ```
//!
//! Every operation that depends on the current time takes `now` explicitly;
//! the registry never reads the wall clock itself.
//!
//! Lookups are linear scans. With duplicate names the first registered child
//! wins, so a second "Ana" can be registered but never looked up by name.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::catalog;
use crate::error::RegistryError;
use crate::types::{
    Appointment, Child, ChildName, Reminder, ScheduleSettings, Vaccine, VaccinationRecord,
    VaccineSchedule,
};

// ---------------------------------------------------------------------------
// 1. Age arithmetic
// ---------------------------------------------------------------------------

/// Age in whole months, counting calendar months only.
///
/// The day of month is ignored: a child born on Jan 31 is one month old on
/// Feb 1. Future birthdates yield negative ages.
pub fn age_in_months(birthdate: NaiveDate, now: impl Datelike) -> i32 {
    (now.year() - birthdate.year()) * 12 + (now.month() as i32 - birthdate.month() as i32)
}

// ---------------------------------------------------------------------------
// 2. Registry
// ---------------------------------------------------------------------------

/// Owns all children and the vaccine catalog for one session.
#[derive(Debug, Clone)]
pub struct Registry {
    children: Vec<Child>,
    catalog: &'static [Vaccine],
    settings: ScheduleSettings,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry over the standard catalog with default settings.
    pub fn new() -> Self {
        Self::with_settings(ScheduleSettings::default())
    }

    pub fn with_settings(settings: ScheduleSettings) -> Self {
        Self {
            children: Vec::new(),
            catalog: &catalog::STANDARD,
            settings,
        }
    }

    pub fn settings(&self) -> ScheduleSettings {
        self.settings
    }

    pub fn catalog(&self) -> &'static [Vaccine] {
        self.catalog
    }

    // -- registration -------------------------------------------------------

    /// Append a new child with no appointments. Never fails.
    pub fn register(
        &mut self,
        name: impl Into<ChildName>,
        birthdate: NaiveDate,
        parent_name: impl Into<String>,
        contact: impl Into<String>,
    ) -> &Child {
        let child = Child {
            name: name.into(),
            birthdate,
            parent_name: parent_name.into(),
            contact: contact.into(),
            vaccination_records: Vec::new(),
        };
        tracing::info!(child = %child.name, birthdate = %child.birthdate, "registered child");
        self.children.push(child);
        &self.children[self.children.len() - 1]
    }

    /// All children in registration order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    // -- lookups ------------------------------------------------------------

    /// First registered child whose name matches case-insensitively.
    pub fn find_child_by_name(&self, name: &str) -> Option<&Child> {
        self.child_index(name).map(|idx| &self.children[idx])
    }

    /// First catalog vaccine whose name matches case-insensitively.
    pub fn find_vaccine_by_name(&self, name: &str) -> Option<&'static Vaccine> {
        let catalog: &'static [Vaccine] = self.catalog;
        catalog.iter().find(|v| v.matches(name))
    }

    fn child_index(&self, name: &str) -> Option<usize> {
        let idx = self.children.iter().position(|c| c.name.matches(name));
        if idx.is_none() {
            tracing::debug!(name, "no child matches");
        }
        idx
    }

    fn require_child(&self, name: &str) -> Result<usize, RegistryError> {
        self.child_index(name)
            .ok_or_else(|| RegistryError::ChildNotFound { name: name.to_owned() })
    }

    // -- schedules ----------------------------------------------------------

    /// Catalog vaccines the child is old enough for, in catalog order.
    pub fn due_vaccines(&self, child: &Child, now: NaiveDateTime) -> Vec<&'static Vaccine> {
        let age = age_in_months(child.birthdate, now);
        let catalog: &'static [Vaccine] = self.catalog;
        catalog.iter().filter(|v| v.is_due_at(age)).collect()
    }

    /// The named child's age and due vaccines.
    pub fn vaccine_schedule(
        &self,
        child_name: &str,
        now: NaiveDateTime,
    ) -> Result<VaccineSchedule<'_>, RegistryError> {
        let child = &self.children[self.require_child(child_name)?];
        Ok(VaccineSchedule {
            child,
            age_months: age_in_months(child.birthdate, now),
            due: self.due_vaccines(child, now),
        })
    }

    // -- appointments -------------------------------------------------------

    /// Book `vaccine_name` for `child_name` at `now + appointment_lead`.
    ///
    /// The child is resolved before the vaccine. On any lookup failure no
    /// record list is touched.
    pub fn schedule_vaccination(
        &mut self,
        child_name: &str,
        vaccine_name: &str,
        now: NaiveDateTime,
    ) -> Result<Appointment<'_>, RegistryError> {
        let idx = self.require_child(child_name)?;
        let vaccine = self.find_vaccine_by_name(vaccine_name).ok_or_else(|| {
            tracing::debug!(vaccine = vaccine_name, "no vaccine matches");
            RegistryError::VaccineNotFound { name: vaccine_name.to_owned() }
        })?;

        let record = VaccinationRecord {
            vaccine,
            scheduled_for: now + self.settings.appointment_lead,
        };
        let child = &mut self.children[idx];
        child.vaccination_records.push(record);
        tracing::info!(
            child = %child.name,
            vaccine = vaccine.name,
            date = %record.scheduled_date(),
            "scheduled vaccination"
        );
        Ok(Appointment { child, record })
    }

    /// The named child's appointments in booking order.
    pub fn vaccination_records(
        &self,
        child_name: &str,
    ) -> Result<&[VaccinationRecord], RegistryError> {
        let idx = self.require_child(child_name)?;
        Ok(&self.children[idx].vaccination_records)
    }

    /// Appointments inside `[now, now + reminder_window)`, ordered by child
    /// then by booking.
    pub fn due_reminders(&self, now: NaiveDateTime) -> Vec<Reminder<'_>> {
        let window_end = now + self.settings.reminder_window;
        let reminders: Vec<Reminder<'_>> = self
            .children
            .iter()
            .flat_map(|child| {
                child
                    .vaccination_records
                    .iter()
                    .filter(move |r| now <= r.scheduled_for && r.scheduled_for < window_end)
                    .map(move |r| Reminder {
                        child,
                        vaccine: r.vaccine,
                        scheduled_for: r.scheduled_for,
                    })
            })
            .collect();
        tracing::debug!(count = reminders.len(), %now, "reminder scan");
        reminders
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

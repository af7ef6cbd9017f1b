//! vaxreg core library: domain types, vaccine catalog, in-memory registry.
//!
//! - [`types`]: newtypes, domain structs and query results
//! - [`catalog`]: the fixed vaccine catalog
//! - [`error`]: [`RegistryError`]
//! - [`registry`]: [`Registry`] and age arithmetic
//!
//! Nothing here prints; callers render the returned values.

pub mod catalog;
pub mod error;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use registry::{age_in_months, Registry};
pub use types::{
    Appointment, Child, ChildName, Reminder, ScheduleSettings, Vaccine, VaccinationRecord,
    VaccineSchedule,
};

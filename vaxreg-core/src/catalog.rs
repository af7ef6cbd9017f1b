//! The fixed vaccine catalog.
//!
//! Entries are ordered by recommended age; due-vaccine listings keep this
//! order.

use crate::types::Vaccine;

/// Standard childhood immunisation catalog.
pub static STANDARD: [Vaccine; 5] = [
    Vaccine {
        name: "BCG",
        diseases_prevented: &["Tuberculosis"],
        recommended_age_months: 0,
    },
    Vaccine {
        name: "Hepatitis B",
        diseases_prevented: &["Hepatitis B"],
        recommended_age_months: 0,
    },
    Vaccine {
        name: "DTP",
        diseases_prevented: &["Diphtheria", "Tetanus", "Pertussis"],
        recommended_age_months: 2,
    },
    Vaccine {
        name: "Polio",
        diseases_prevented: &["Polio"],
        recommended_age_months: 2,
    },
    Vaccine {
        name: "Measles",
        diseases_prevented: &["Measles"],
        recommended_age_months: 9,
    },
];

/// First catalog entry whose name matches `name` case-insensitively.
pub fn find(name: &str) -> Option<&'static Vaccine> {
    STANDARD.iter().find(|v| v.matches(name))
}

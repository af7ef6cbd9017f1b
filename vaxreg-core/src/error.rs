//! Error types for vaxreg-core.

use thiserror::Error;

/// All errors that can arise from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No registered child carries this name (case-insensitive).
    #[error("child with name {name} not found")]
    ChildNotFound { name: String },

    /// The name does not match any catalog vaccine (case-insensitive).
    #[error("vaccine {name} not found in catalog")]
    VaccineNotFound { name: String },

    /// User input could not be parsed, e.g. a malformed birthdate.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl RegistryError {
    /// `true` for the lookup failures (child or vaccine).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::ChildNotFound { .. } | RegistryError::VaccineNotFound { .. }
        )
    }
}

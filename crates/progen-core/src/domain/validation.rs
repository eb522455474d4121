use crate::domain::{
    entities::{ProjectStructure, ScaffoldConfig},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ScaffoldConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}

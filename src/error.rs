//! # Conversion Errors
//!
//! Every converter fails fast and synchronously on structural violations. Errors are
//! never wrapped by the assembler: whatever a sub-converter returns is what the caller
//! of [`crate::convert::convert_parsed_jdl`] sees.
//!
//! ## Taxonomy
//!
//! | Class | Variants |
//! |-------|----------|
//! | Missing required input | [`ConversionError::MissingInput`] |
//! | Referential inconsistency | [`ConversionError::EntityNotInApplication`] |
//! | Constant resolution failure | [`ConversionError::UndefinedConstant`] |
//! | Malformed values | cardinality, application type, deployment and config value errors |
//!
//! Use [`ConversionError::is_missing_input`] and [`ConversionError::is_referential`]
//! to present targeted diagnostics.

use thiserror::Error;

/// Result alias used by all converters.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised while lowering a parsed JDL tree into a [`crate::model::JdlObject`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A required collection was absent from the parsed tree.
    ///
    /// An empty collection is valid; only a missing one is rejected.
    #[error("{what} have to be passed so as to be converted.")]
    MissingInput {
        /// Human name of the missing collection (e.g. `Entities`, `Validations`)
        what: &'static str,
    },

    /// An option declared inside an application block references an entity that is
    /// not part of that application's entity list.
    #[error(
        "The entity {entity} in the {option} option isn't declared in {application}'s entity list."
    )]
    EntityNotInApplication {
        /// Offending entity name
        entity: String,
        /// Option name the entity was used in
        option: String,
        /// Base name of the owning application
        application: String,
    },

    /// A validation references a constant that the document never declares.
    #[error("The constant {constant} used by the field {field} is not declared.")]
    UndefinedConstant {
        /// Name of the missing constant
        constant: String,
        /// Field whose validation referenced it
        field: String,
    },

    /// A relationship cardinality token is not one of the four supported kinds.
    #[error("Unknown relationship cardinality '{cardinality}'.")]
    UnknownCardinality {
        /// The raw token from the parsed tree
        cardinality: String,
    },

    /// An application declares an application type that isn't supported.
    #[error("Unknown application type '{value}'.")]
    UnknownApplicationType {
        /// The raw value
        value: String,
    },

    /// A deployment block has no `deploymentType` key.
    #[error("A deployment has to declare its deploymentType.")]
    MissingDeploymentType,

    /// A deployment declares a deployment type that isn't supported.
    #[error("Unknown deployment type '{value}'.")]
    UnknownDeploymentType {
        /// The raw value
        value: String,
    },

    /// A configuration key carries a value of the wrong shape.
    #[error("Invalid value for '{key}' in {owner}: expected {expected}.")]
    InvalidConfigValue {
        /// Application base name or deployment type owning the key
        owner: String,
        /// Offending configuration key
        key: String,
        /// Expected shape, e.g. `a string`
        expected: &'static str,
    },
}

impl ConversionError {
    pub(crate) fn missing(what: &'static str) -> Self {
        ConversionError::MissingInput { what }
    }

    /// `true` for absent required collections.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ConversionError::MissingInput { .. })
    }

    /// `true` for cross-reference failures (entity used in an application option but
    /// not declared by that application).
    #[must_use]
    pub fn is_referential(&self) -> bool {
        matches!(self, ConversionError::EntityNotInApplication { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_not_in_application_names_everything_once() {
        let err = ConversionError::EntityNotInApplication {
            entity: "Dog".to_string(),
            option: "readOnly".to_string(),
            application: "kennel".to_string(),
        };
        let message = err.to_string();
        assert_eq!(message.matches("Dog").count(), 1);
        assert_eq!(message.matches("readOnly").count(), 1);
        assert_eq!(message.matches("kennel").count(), 1);
        assert!(err.is_referential());
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_missing_input_message() {
        let err = ConversionError::missing("Entities");
        assert_eq!(
            err.to_string(),
            "Entities have to be passed so as to be converted."
        );
        assert!(err.is_missing_input());
    }
}

//! Configuration validation errors.

use thiserror::Error;

/// Raised by `validate()` on configuration structs.
///
/// # Example
///
/// ```rust
/// use poloniex_core::error::ConfigValidationError;
///
/// let err = ConfigValidationError::too_high("timeout", "600s", "5 minutes");
/// assert!(err.to_string().contains("timeout"));
/// assert_eq!(err.field_name(), "timeout");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigValidationError {
    /// Field value exceeds the maximum allowed value.
    #[error("Field '{field}' value {value} exceeds maximum {max}")]
    ValueTooHigh {
        /// Configuration field name
        field: &'static str,
        /// Provided value
        value: String,
        /// Maximum allowed value
        max: String,
    },

    /// Field value is invalid for reasons other than range.
    #[error("Field '{field}' has invalid value: {reason}")]
    ValueInvalid {
        /// Configuration field name
        field: &'static str,
        /// Why the value is rejected
        reason: String,
    },
}

impl ConfigValidationError {
    /// Creates a `ValueTooHigh` error.
    pub fn too_high(
        field: &'static str,
        value: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        Self::ValueTooHigh {
            field,
            value: value.into(),
            max: max.into(),
        }
    }

    /// Creates a `ValueInvalid` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValueInvalid {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::ValueTooHigh { field, .. } | Self::ValueInvalid { field, .. } => field,
        }
    }
}

/// Outcome of a successful validation: non-fatal warnings only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Issues worth surfacing that do not make the configuration unusable.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a result with no warnings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result carrying the given warnings.
    #[must_use]
    pub fn with_warnings(warnings: Vec<String>) -> Self {
        Self { warnings }
    }

    /// Returns true when there is nothing to report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

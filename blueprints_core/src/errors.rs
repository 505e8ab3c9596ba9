//! # Error Types
//!
//! Structured error types for blueprints_core. Every record and shape is
//! validated once at construction; a failed validation returns one of these
//! variants naming the offending field and the condition that was violated.
//!
//! ## Example
//!
//! ```rust
//! use blueprints_core::errors::{BlueprintsError, BlueprintsResult};
//!
//! fn validate_width(width: f64) -> BlueprintsResult<()> {
//!     if width <= 0.0 {
//!         return Err(BlueprintsError::invalid_input(
//!             "width",
//!             width.to_string(),
//!             "Width must be a positive value",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-10.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for blueprints_core operations
pub type BlueprintsResult<T> = Result<T, BlueprintsError>;

/// Structured error type for construction and property queries.
///
/// All variants are domain errors: the caller supplied an invalid value or
/// combination of values and has to reconstruct with corrected input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BlueprintsError {
    /// A value is out of range or otherwise invalid
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A field that is conditionally required was not supplied
    #[error("Missing required field '{field}': required when {condition}")]
    MissingField { field: String, condition: String },

    /// A field was supplied although the discriminant forbids it
    #[error("Field '{field}' is not allowed when {condition}")]
    ForbiddenField { field: String, condition: String },

    /// A derived property was requested on an empty collection
    #[error("Empty collection: {collection} must contain at least one item")]
    EmptyCollection { collection: String },

    /// Lookup in a fixed table failed (unknown profile name, soil type, ...)
    #[error("{what} not found: {name}")]
    NotFound { what: String, name: String },

    /// A textual value could not be parsed (e.g. a SAF vector string)
    #[error("Could not parse '{field}' from \"{value}\": {reason}")]
    Parse {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error (settings files)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl BlueprintsError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BlueprintsError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>, condition: impl Into<String>) -> Self {
        BlueprintsError::MissingField {
            field: field.into(),
            condition: condition.into(),
        }
    }

    /// Create a ForbiddenField error
    pub fn forbidden_field(field: impl Into<String>, condition: impl Into<String>) -> Self {
        BlueprintsError::ForbiddenField {
            field: field.into(),
            condition: condition.into(),
        }
    }

    /// Create an EmptyCollection error
    pub fn empty_collection(collection: impl Into<String>) -> Self {
        BlueprintsError::EmptyCollection {
            collection: collection.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(what: impl Into<String>, name: impl Into<String>) -> Self {
        BlueprintsError::NotFound {
            what: what.into(),
            name: name.into(),
        }
    }

    /// Create a Parse error
    pub fn parse(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BlueprintsError::Parse {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BlueprintsError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field this error is about, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            BlueprintsError::InvalidInput { field, .. }
            | BlueprintsError::MissingField { field, .. }
            | BlueprintsError::ForbiddenField { field, .. }
            | BlueprintsError::Parse { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BlueprintsError::InvalidInput { .. } => "INVALID_INPUT",
            BlueprintsError::MissingField { .. } => "MISSING_FIELD",
            BlueprintsError::ForbiddenField { .. } => "FORBIDDEN_FIELD",
            BlueprintsError::EmptyCollection { .. } => "EMPTY_COLLECTION",
            BlueprintsError::NotFound { .. } => "NOT_FOUND",
            BlueprintsError::Parse { .. } => "PARSE_ERROR",
            BlueprintsError::FileError { .. } => "FILE_ERROR",
            BlueprintsError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for BlueprintsError {
    fn from(e: serde_json::Error) -> Self {
        BlueprintsError::SerializationError { reason: e.to_string() }
    }
}

/// Check that a named value is strictly positive and finite.
///
/// `label` is the human-readable name used in the message, e.g. "Width".
pub(crate) fn ensure_positive(field: &str, label: &str, value: f64) -> BlueprintsResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BlueprintsError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be a positive value", label),
        ));
    }
    Ok(())
}

/// Check that a named value is finite (no NaN or infinity).
pub(crate) fn ensure_finite(field: &str, value: f64) -> BlueprintsResult<()> {
    if !value.is_finite() {
        return Err(BlueprintsError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(())
}

/// Check that a name is not blank.
pub(crate) fn ensure_name(field: &str, value: &str) -> BlueprintsResult<()> {
    if value.trim().is_empty() {
        return Err(BlueprintsError::invalid_input(field, value, "Name must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BlueprintsError::invalid_input("width", "-10", "Width must be a positive value");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: BlueprintsError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BlueprintsError::missing_field("duration", "x").error_code(), "MISSING_FIELD");
        assert_eq!(BlueprintsError::empty_collection("elements").error_code(), "EMPTY_COLLECTION");
        assert_eq!(BlueprintsError::not_found("Profile", "HEB999").error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_missing_field_message_names_field_and_condition() {
        let error = BlueprintsError::missing_field("duration", "action_type is Variable");
        let message = error.to_string();
        assert!(message.contains("duration"));
        assert!(message.contains("Variable"));
        assert_eq!(error.field(), Some("duration"));
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("width", "Width", 1.0).is_ok());
        let err = ensure_positive("width", "Width", -10.0).unwrap_err();
        assert!(err.to_string().contains("Width must be a positive value"));
        assert!(ensure_positive("width", "Width", 0.0).is_err());
        assert!(ensure_positive("width", "Width", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_name() {
        assert!(ensure_name("name", "LC1").is_ok());
        assert!(ensure_name("name", "   ").is_err());
    }
}

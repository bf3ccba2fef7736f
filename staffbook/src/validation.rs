//! Validation Support
//!
//! Request DTOs implement [`Validatable`] and report every failing field at
//! once through [`ValidationErrors`]; the service turns a failed validation
//! into a 400 response listing the messages per field.
//!
//! # Example
//!
//! ```rust,ignore
//! use staffbook::validation::{Validatable, ValidationErrors, validators};
//!
//! impl Validatable for EmployeeCreate {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         errors.check(validators::required("name", self.name.as_deref(), "Name is required."));
//!         errors.result()
//!     }
//! }
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Validation error with field name and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The field that failed validation, as named in the JSON payload
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a validation error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record the outcome of a single validator
    pub fn check(&mut self, outcome: Result<(), ValidationError>) {
        if let Err(error) = outcome {
            self.add(error);
        }
    }

    /// Check if there are any errors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get all errors
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Messages grouped by field, in insertion order within each field
    #[must_use]
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            grouped
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        grouped
    }

    /// Convert to Result
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was collected.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Trait for request payloads that can be validated
///
/// The service calls `validate` before any mapping or database work.
pub trait Validatable {
    /// Validate the instance
    ///
    /// # Errors
    ///
    /// Returns every rule the instance breaks.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Helper validators for common patterns
///
/// Each takes the user-facing message so payloads can word their errors.
pub mod validators {
    use super::ValidationError;
    use regex::Regex;
    use std::sync::LazyLock;

    static TEN_DIGITS: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\d{10}$").expect("cell phone pattern is valid"));

    static EMAIL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid"));

    /// Value must be present and not blank
    pub fn required(
        field: &str,
        value: Option<&str>,
        message: &str,
    ) -> Result<(), ValidationError> {
        match value {
            Some(value) if !value.trim().is_empty() => Ok(()),
            _ => Err(ValidationError::new(field, message)),
        }
    }

    /// At most `max` characters
    pub fn max_length(
        field: &str,
        value: &str,
        max: usize,
        message: &str,
    ) -> Result<(), ValidationError> {
        if value.chars().count() > max {
            return Err(ValidationError::new(field, message));
        }
        Ok(())
    }

    /// Inclusive numeric range
    pub fn range<T: PartialOrd>(
        field: &str,
        value: T,
        min: T,
        max: T,
        message: &str,
    ) -> Result<(), ValidationError> {
        if value < min || value > max {
            return Err(ValidationError::new(field, message));
        }
        Ok(())
    }

    /// Exactly ten digits
    pub fn cell_phone(field: &str, value: &str, message: &str) -> Result<(), ValidationError> {
        if !TEN_DIGITS.is_match(value) {
            return Err(ValidationError::new(field, message));
        }
        Ok(())
    }

    /// One `@` with text on both sides and no whitespace
    pub fn email(field: &str, value: &str, message: &str) -> Result<(), ValidationError> {
        if !EMAIL.is_match(value) {
            return Err(ValidationError::new(field, message));
        }
        Ok(())
    }
}

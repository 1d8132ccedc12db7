//! Validation system for manifest values
//!
//! Each manifest section implements the `ConfigSection` trait and reports
//! every problem it finds rather than stopping at the first one.

pub use crate::error::ValidationError;
use podfeed_builder::Language;

/// Trait for manifest sections that can validate themselves
pub trait ConfigSection {
    /// Validates the section
    ///
    /// Returns a list of validation errors. Empty list means valid.
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Returns the section name for error reporting
    fn section_name(&self) -> &'static str;
}

/// Common validators for manifest values
pub struct Validator;

impl Validator {
    /// Validates that a numeric value is within a range
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            Err(ValidationError::with_value(
                field,
                format!("must be between {} and {}", min, max),
                value,
            ))
        } else {
            Ok(())
        }
    }

    /// Validates that a string is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Validates that a string is an absolute http or https URL
    pub fn is_url(value: &str, field: &str) -> Result<(), ValidationError> {
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
            _ => Err(ValidationError::with_value(
                field,
                "must be an http(s) URL",
                value,
            )),
        }
    }

    /// Validates that a string looks like an email address
    pub fn is_email(value: &str, field: &str) -> Result<(), ValidationError> {
        match value.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ValidationError::with_value(
                field,
                "must be an email address",
                value,
            )),
        }
    }

    /// Validates that a string is a supported language code (`en`, `pt-BR`)
    pub fn is_language(value: &str, field: &str) -> Result<(), ValidationError> {
        match Language::from_code(value) {
            Some(_) => Ok(()),
            None => Err(ValidationError::with_value(
                field,
                "must be a supported language code",
                value,
            )),
        }
    }

    /// Validates an optional value only when present
    pub fn optional<T: ?Sized>(
        value: Option<&T>,
        field: &str,
        check: fn(&T, &str) -> Result<(), ValidationError>,
    ) -> Result<(), ValidationError> {
        value.map_or(Ok(()), |v| check(v, field))
    }

    /// Collects multiple validation results into a single result
    pub fn collect_errors(
        results: Vec<Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(|r| r.err()).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

//! Field validation helpers shared by the domain constructors
//!
//! Every helper takes the field name and the exact message to report so that
//! value objects and entities can keep their user-facing wording in one place.

use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Brazilian CEP: five digits, optional hyphen, three digits
static ZIP_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}-?\d{3}$").expect("Invalid zip code regex"));

/// Common validation utilities
pub struct Validation;

impl Validation {
    /// Validate that a string is not empty after trimming
    pub fn validate_not_empty(value: &str, field_name: &str, message: &str) -> DomainResult<()> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(field_name, message));
        }
        Ok(())
    }

    /// Validate a code of exactly `length` ASCII letters after trimming.
    ///
    /// ASCII keeps the length stable under upper-casing (`ß` becomes `SS`).
    pub fn validate_letter_code(
        value: &str,
        field_name: &str,
        length: usize,
        message: &str,
    ) -> DomainResult<()> {
        let code = value.trim();
        if code.len() != length || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DomainError::validation(field_name, message));
        }
        Ok(())
    }

    /// Validate a zip code against `NNNNN-NNN` / `NNNNNNNN`
    pub fn validate_zip_code(value: &str, field_name: &str, message: &str) -> DomainResult<()> {
        // `\d` is Unicode-aware in the regex crate
        if !value.is_ascii() || !ZIP_CODE_REGEX.is_match(value) {
            return Err(DomainError::validation(field_name, message));
        }
        Ok(())
    }

    /// Validate that a collection is not empty
    pub fn validate_not_empty_collection<T>(
        collection: &[T],
        field_name: &str,
        message: &str,
    ) -> DomainResult<()> {
        if collection.is_empty() {
            return Err(DomainError::validation(field_name, message));
        }
        Ok(())
    }

    /// Validate that a number is finite and not negative
    pub fn validate_non_negative(value: f64, field_name: &str, message: &str) -> DomainResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(field_name, message));
        }
        Ok(())
    }
}

// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::check_digit;
use time::Date;
use time::macros::format_description;

/// Maximum length of a document type name.
pub const MAX_DOCUMENT_TYPE_NAME_LEN: usize = 100;

/// Validates an employee name.
///
/// # Errors
///
/// Returns an error if the name is empty or only whitespace.
pub fn validate_employee_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a document type name.
///
/// # Errors
///
/// Returns an error if the name is empty, only whitespace, or longer than
/// [`MAX_DOCUMENT_TYPE_NAME_LEN`] characters.
pub fn validate_document_type_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidDocumentTypeName(String::from(
            "Name cannot be empty",
        )));
    }
    if name.chars().count() > MAX_DOCUMENT_TYPE_NAME_LEN {
        return Err(DomainError::InvalidDocumentTypeName(format!(
            "Name cannot exceed {MAX_DOCUMENT_TYPE_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates and parses an ISO 8601 (`YYYY-MM-DD`) hire date.
///
/// # Errors
///
/// Returns an error if the string does not parse as a calendar date.
pub fn validate_hire_date(date_string: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(date_string, &format).map_err(|e| DomainError::InvalidHireDate {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Generates a checksum-valid CPF from a numeric seed.
///
/// The seed supplies the nine base digits (modulo `10^9`); both check digits
/// are computed from them. Deterministic, intended for tests and seed data.
/// Seeds whose nine base digits are all identical are nudged so the result
/// never collides with the repeated-digit rejection rule.
#[must_use]
pub fn generate_cpf(seed: u64) -> String {
    let base: u64 = seed % 1_000_000_000;
    let mut digits: Vec<u8> = (0..9)
        .rev()
        .map(|i| u8::try_from((base / 10_u64.pow(i)) % 10).unwrap_or(0))
        .collect();

    if digits.iter().all(|d| *d == digits[0]) {
        digits[8] = (digits[8] + 1) % 10;
    }

    let first: u8 = check_digit(&digits[..9]);
    digits.push(first);
    let second: u8 = check_digit(&digits[..10]);
    digits.push(second);

    digits.iter().map(ToString::to_string).collect()
}

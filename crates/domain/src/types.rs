// Copyright (C) 2026 DocTrack Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Submission status of an employee-document assignment.
///
/// An assignment starts as `Pending` and transitions exactly once to
/// `Submitted`. There is no reverse transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentStatus {
    /// The document has been assigned but not yet submitted.
    #[default]
    Pending,
    /// The document has been submitted. Terminal state.
    Submitted,
}

impl FromStr for DocumentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "SUBMITTED" => Ok(Self::Submitted),
            _ => Err(DomainError::InvalidDocumentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DocumentStatus {
    /// Converts this status to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Submitted => "SUBMITTED",
        }
    }

    /// Returns whether a submission is permitted from this status.
    ///
    /// Only `Pending` assignments may be submitted; `Submitted` is terminal.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A validated Brazilian CPF (the employee's unique natural key).
///
/// Stored in canonical form: exactly 11 digits, no punctuation. Construction
/// via [`Cpf::parse`] strips formatting characters and validates both
/// checksum digits, so a `Cpf` value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpf(String);

impl Cpf {
    /// Parses and validates a CPF from user input.
    ///
    /// Non-digit characters (dots, dashes, spaces) are stripped before
    /// validation, so `"123.456.789-09"` and `"12345678909"` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleaned input is not exactly 11 digits, if
    /// all digits are identical, or if either check digit is wrong.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let digits: Vec<u8> = input
            .chars()
            .filter(char::is_ascii_digit)
            .filter_map(|c| c.to_digit(10))
            .map(|d| u8::try_from(d).unwrap_or(0))
            .collect();

        if digits.len() != 11 {
            return Err(DomainError::InvalidCpf(format!(
                "CPF must contain exactly 11 digits, got {}",
                digits.len()
            )));
        }

        // CPFs composed of a single repeated digit pass the checksum but are
        // not valid identifiers.
        if digits.iter().all(|d| *d == digits[0]) {
            return Err(DomainError::InvalidCpf(String::from(
                "CPF cannot consist of a single repeated digit",
            )));
        }

        if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
            return Err(DomainError::InvalidCpf(String::from(
                "CPF checksum digits do not match",
            )));
        }

        let canonical: String = digits.iter().map(ToString::to_string).collect();
        Ok(Self(canonical))
    }

    /// Returns the canonical 11-digit form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes a CPF check digit over the given digit prefix.
///
/// The prefix is weighted from `len + 1` down to 2; the check digit is
/// `(sum * 10) mod 11`, with 10 collapsing to 0.
pub(crate) fn check_digit(prefix: &[u8]) -> u8 {
    let len: u32 = u32::try_from(prefix.len()).unwrap_or(0);
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * (len + 1 - u32::try_from(i).unwrap_or(0)))
        .sum();
    let remainder: u32 = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        u8::try_from(remainder).unwrap_or(0)
    }
}

//! Input-level checks shared by every form on the site.
//!
//! These mirror what the browser enforces on `required` and `type="email"`
//! inputs, so a request that bypasses the browser gets the same answer.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::notice::Notice;
use crate::types::{Email, EmailError};

/// A single form field failed its input check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field was empty or whitespace.
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// An email field does not have a basic `local@domain` shape.
    #[error("{field} is not a valid email address: {source}")]
    InvalidEmail {
        field: &'static str,
        #[source]
        source: EmailError,
    },

    /// A numeric field could not be parsed or was negative.
    #[error("{field} must be a non-negative number")]
    InvalidNumber { field: &'static str },
}

impl FieldError {
    /// Name of the offending field, as shown to the visitor.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::InvalidEmail { field, .. }
            | Self::InvalidNumber { field } => field,
        }
    }

    /// Destructive notice describing the failure.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Missing { field } => {
                Notice::destructive("Missing fields", format!("Please fill in {field}."))
            }
            Self::InvalidEmail { .. } => {
                Notice::destructive("Invalid email", "Please enter a valid email address.")
            }
            Self::InvalidNumber { field } => {
                Notice::destructive("Invalid number", format!("{field} must be a number."))
            }
        }
    }
}

/// Trimmed value of a required field.
///
/// # Errors
///
/// Returns [`FieldError::Missing`] if the value is empty after trimming.
pub fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Missing { field });
    }
    Ok(value.to_owned())
}

/// Trimmed value of an optional field, `None` when blank.
#[must_use]
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Parse a required email field.
///
/// # Errors
///
/// Returns [`FieldError::Missing`] for blank input and
/// [`FieldError::InvalidEmail`] when the shape check fails.
pub fn email(field: &'static str, value: &str) -> Result<Email, FieldError> {
    let value = required(field, value)?;
    Email::parse(&value).map_err(|source| FieldError::InvalidEmail { field, source })
}

/// Parse a required non-negative decimal field.
///
/// # Errors
///
/// Returns [`FieldError::Missing`] for blank input and
/// [`FieldError::InvalidNumber`] for anything else that is not a
/// non-negative decimal.
pub fn decimal(field: &'static str, value: &str) -> Result<Decimal, FieldError> {
    let value = required(field, value)?;
    value
        .parse::<Decimal>()
        .ok()
        .filter(|d| !d.is_sign_negative())
        .ok_or(FieldError::InvalidNumber { field })
}

/// Parse a required non-negative integer field.
///
/// # Errors
///
/// Same as [`decimal`], for whole numbers.
pub fn count(field: &'static str, value: &str) -> Result<u32, FieldError> {
    let value = required(field, value)?;
    value
        .parse::<u32>()
        .map_err(|_| FieldError::InvalidNumber { field })
}

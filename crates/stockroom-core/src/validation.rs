//! Input validation performed before any remote call.
//!
//! A draft is rejected when its name is empty or its quantity is not a
//! positive number. Accepted quantities are truncated toward zero.

use std::fmt;

use crate::models::{Draft, ItemFields, Quantity};

/// Validation failures surfaced synchronously to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    InvalidQuantity,
    MissingCredentials,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName | ValidationError::InvalidQuantity => {
                write!(f, "Please provide a valid item name and quantity.")
            }
            ValidationError::MissingCredentials => {
                write!(f, "Please enter both an email and a password.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parses a raw quantity string.
///
/// "3.9" becomes 3. Empty, non-numeric, non-finite and `<= 0` input is
/// rejected, as is anything that truncates below 1 ("0.5") or exceeds int64.
///
/// # Errors
/// Returns `ValidationError::InvalidQuantity` when the input is rejected.
pub fn parse_quantity(raw: &str) -> Result<Quantity, ValidationError> {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return Err(ValidationError::InvalidQuantity);
    };
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidQuantity);
    }
    let truncated = value.trunc();
    if truncated >= Quantity::MAX as f64 {
        return Err(ValidationError::InvalidQuantity);
    }
    Quantity::new(truncated as u64).ok_or(ValidationError::InvalidQuantity)
}

/// Validates a draft into document fields.
///
/// # Errors
/// Returns the first failing check: name, then quantity.
pub fn validate_draft(draft: &Draft) -> Result<ItemFields, ValidationError> {
    if draft.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let quantity = parse_quantity(&draft.quantity)?;
    Ok(ItemFields {
        name: draft.name.clone(),
        quantity,
    })
}

/// Checks that both credential fields are filled in.
///
/// # Errors
/// Returns `ValidationError::MissingCredentials` if either is empty.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        Err(ValidationError::MissingCredentials)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: &str) -> Draft {
        Draft {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_parse_quantity_truncates_fractions() {
        assert_eq!(parse_quantity("3.9").map(Quantity::get), Ok(3));
        assert_eq!(parse_quantity("2.7").map(Quantity::get), Ok(2));
        assert_eq!(parse_quantity(" 12 ").map(Quantity::get), Ok(12));
        assert_eq!(parse_quantity("1e3").map(Quantity::get), Ok(1000));
    }

    #[test]
    fn test_parse_quantity_rejects_non_positive_and_garbage() {
        for raw in ["", "   ", "0", "-1", "-0.5", "abc", "NaN", "inf", "0x10", "0.5", "12abc"] {
            assert_eq!(
                parse_quantity(raw),
                Err(ValidationError::InvalidQuantity),
                "expected rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_quantity_rejects_beyond_int64() {
        assert_eq!(
            parse_quantity("1e30"),
            Err(ValidationError::InvalidQuantity)
        );
    }

    #[test]
    fn test_validate_draft_checks_name_first() {
        assert_eq!(
            validate_draft(&draft("", "abc")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate_draft(&draft("Widget", "0")),
            Err(ValidationError::InvalidQuantity)
        );
    }

    #[test]
    fn test_validate_draft_keeps_name_verbatim() {
        let fields = validate_draft(&draft(" Widget ", "4")).unwrap();
        assert_eq!(fields.name, " Widget ");
        assert_eq!(fields.quantity.get(), 4);
    }

    #[test]
    fn test_validate_credentials_requires_both() {
        assert!(validate_credentials("a@b.c", "pw").is_ok());
        assert_eq!(
            validate_credentials("", "pw"),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_credentials("a@b.c", ""),
            Err(ValidationError::MissingCredentials)
        );
    }
}

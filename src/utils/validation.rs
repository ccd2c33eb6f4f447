//! Validation utilities

use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that a PIN is exactly 4 ASCII digits
pub fn validate_pin(pin: &str) -> LedgerResult<()> {
    if pin.len() == 4 && pin.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(LedgerError::InvalidPin)
    }
}

/// Validate that a monetary amount is strictly positive
pub fn validate_positive_amount(amount: &BigDecimal) -> LedgerResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(LedgerError::InvalidAmount)
    } else {
        Ok(())
    }
}

/// Validate that a holder name is usable
pub fn validate_holder_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Holder name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(LedgerError::Validation(
            "Holder name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_must_be_exactly_four_digits() {
        assert!(validate_pin("1234").is_ok());
        assert!(validate_pin("0000").is_ok());

        assert!(matches!(validate_pin("123"), Err(LedgerError::InvalidPin)));
        assert!(matches!(
            validate_pin("12345"),
            Err(LedgerError::InvalidPin)
        ));
        assert!(matches!(validate_pin("12a4"), Err(LedgerError::InvalidPin)));
        assert!(matches!(validate_pin(""), Err(LedgerError::InvalidPin)));
        // Non-ASCII digits are rejected even though they satisfy is_numeric
        assert!(matches!(validate_pin("١٢٣٤"), Err(LedgerError::InvalidPin)));
    }

    #[test]
    fn amounts_must_be_positive() {
        assert!(validate_positive_amount(&BigDecimal::from(1)).is_ok());
        assert!(matches!(
            validate_positive_amount(&BigDecimal::from(0)),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            validate_positive_amount(&BigDecimal::from(-5)),
            Err(LedgerError::InvalidAmount)
        ));
    }

    #[test]
    fn holder_name_must_not_be_blank() {
        assert!(validate_holder_name("Ana Santos").is_ok());
        assert!(validate_holder_name("   ").is_err());
        assert!(validate_holder_name(&"x".repeat(101)).is_err());
    }
}

// src/common/validation.rs

use rust_decimal::Decimal;
use validator::ValidationError;

// ---
// Validações customizadas compartilhadas pelos payloads
// ---

/// Telefones: dígitos, `+`, `-`, `/`, espaços e parênteses.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let ok = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '/' | '(' | ')' | ' '));
    if !ok {
        let mut err = ValidationError::new("phone");
        err.message = Some("invalid_phone".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("must_not_be_negative".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_percentage(val: &Decimal) -> Result<(), ValidationError> {
    if *val < Decimal::ZERO || *val > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.add_param("max".into(), &100.0);
        err.message = Some("invalid_percentage".into());
        return Err(err);
    }
    Ok(())
}

/// E-mails são guardados em minúsculas, sem espaços nas pontas.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn phone_accepts_common_formats() {
        assert!(validate_phone("(011) 4555-1234").is_ok());
        assert!(validate_phone("+598 99 123 456").is_ok());
        assert!(validate_phone("4555-1234 / 4555-4321").is_ok());
        assert!(validate_phone("").is_ok());
    }

    #[test]
    fn phone_rejects_letters() {
        let err = validate_phone("call me").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("invalid_phone"));
    }

    #[test]
    fn premium_cannot_be_negative() {
        assert!(validate_not_negative(&Decimal::new(-1, 2)).is_err());
        assert!(validate_not_negative(&Decimal::ZERO).is_ok());
        assert!(validate_not_negative(&Decimal::new(125050, 2)).is_ok());
    }

    #[test]
    fn percentage_is_bounded() {
        assert!(validate_percentage(&Decimal::new(1050, 2)).is_ok());
        assert!(validate_percentage(&Decimal::ONE_HUNDRED).is_ok());
        assert!(validate_percentage(&Decimal::new(10001, 2)).is_err());
        assert!(validate_percentage(&Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn email_is_lowercased() {
        assert_eq!(normalize_email("  Ana.Perez@Example.COM "), "ana.perez@example.com");
    }
}

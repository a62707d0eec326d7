//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationError;

lazy_static! {
    // Números de Zambia: +260 / 260 / 0 seguido de 9 dígitos, o 9-12 dígitos a secas
    static ref PHONE_RE: Regex = Regex::new(r"^(?:\+?260|0)?\d{9,12}$").unwrap();
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha de viaje
pub fn validate_travel_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("travel_date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono móvil
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone: String = value.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    if !PHONE_RE.is_match(&clean_phone) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que el número de asiento esté dentro de la capacidad del bus
pub fn validate_seat_number(seat_number: i32, capacity: i32) -> Result<(), ValidationError> {
    if seat_number < 1 || seat_number > capacity {
        let mut error = ValidationError::new("seat_number");
        error.add_param("value".into(), &seat_number);
        error.add_param("capacity".into(), &capacity);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        let valid_uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert!(validate_uuid(valid_uuid).is_ok());

        let invalid_uuid = "invalid-uuid";
        assert!(validate_uuid(invalid_uuid).is_err());
    }

    #[test]
    fn test_validate_travel_date() {
        assert!(validate_travel_date("2025-09-15").is_ok());
        assert!(validate_travel_date("2025/09/15").is_err());
        assert!(validate_travel_date("15-09-2025").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+260977123456").is_ok());
        assert!(validate_phone("0977123456").is_ok());
        assert!(validate_phone("977123456").is_ok());
        assert!(validate_phone("097 712 3456").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("not-a-phone").is_err());
    }

    #[test]
    fn test_validate_seat_number() {
        assert!(validate_seat_number(1, 44).is_ok());
        assert!(validate_seat_number(44, 44).is_ok());
        assert!(validate_seat_number(0, 44).is_err());
        assert!(validate_seat_number(45, 44).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }
}

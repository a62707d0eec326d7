//! Simulador de pagos mobile money
//!
//! No hay integración real con el proveedor: el resultado se decide por el
//! ÚLTIMO DÍGITO del número de teléfono, con respuestas enlatadas y un
//! retardo artificial que imita la latencia del proveedor.
//!
//!   0-5 → success
//!   6   → failed: insufficient funds
//!   7   → pending: subscriber unreachable
//!   8   → failed: invalid account
//!   9   → failed: declined by subscriber

use rand::Rng;
use std::time::Duration;
use tracing::info;

use crate::dto::payment_dto::PaymentResponse;
use crate::utils::errors::AppError;

/// Resultado interno del simulador
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Success,
    InsufficientFunds,
    SubscriberUnreachable,
    InvalidAccount,
    Declined,
}

/// Decidir el resultado según el último dígito del teléfono
pub fn simulate_outcome(phone: &str) -> Result<PaymentOutcome, AppError> {
    let last_digit = phone
        .chars()
        .rev()
        .find(|c| c.is_ascii_digit())
        .ok_or_else(|| AppError::ValidationError("Phone number has no digits".to_string()))?;

    let outcome = match last_digit {
        '0' | '1' | '2' | '3' | '4' | '5' => PaymentOutcome::Success,
        '6' => PaymentOutcome::InsufficientFunds,
        '7' => PaymentOutcome::SubscriberUnreachable,
        '8' => PaymentOutcome::InvalidAccount,
        _ => PaymentOutcome::Declined,
    };

    Ok(outcome)
}

/// Generar una referencia de transacción estilo TIY-<12 hex>
pub fn generate_transaction_reference() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..12)
        .map(|_| {
            let n: u8 = rng.gen_range(0..16);
            std::char::from_digit(n as u32, 16).unwrap()
        })
        .collect();
    format!("TIY-{}", suffix.to_uppercase())
}

pub struct PaymentService {
    delay: Duration,
}

impl PaymentService {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Procesar un pago simulado
    pub async fn process(&self, phone: &str, amount: f64) -> Result<PaymentResponse, AppError> {
        if amount <= 0.0 {
            return Err(AppError::ValidationError("Amount must be greater than zero".to_string()));
        }

        let outcome = simulate_outcome(phone)?;

        // Latencia simulada del proveedor
        tokio::time::sleep(self.delay).await;

        let response = match outcome {
            PaymentOutcome::Success => {
                let reference = generate_transaction_reference();
                info!("💰 Pago simulado exitoso: {} ({} ZMW)", reference, amount);
                PaymentResponse {
                    status: "success".to_string(),
                    message: "Payment received. Thank you for travelling with Tiyende".to_string(),
                    transaction_reference: Some(reference),
                }
            }
            PaymentOutcome::InsufficientFunds => PaymentResponse {
                status: "failed".to_string(),
                message: "Insufficient funds in mobile money wallet".to_string(),
                transaction_reference: None,
            },
            PaymentOutcome::SubscriberUnreachable => PaymentResponse {
                status: "pending".to_string(),
                message: "Subscriber unreachable. Approve the prompt on your phone and retry".to_string(),
                transaction_reference: None,
            },
            PaymentOutcome::InvalidAccount => PaymentResponse {
                status: "failed".to_string(),
                message: "Mobile money account not found for this number".to_string(),
                transaction_reference: None,
            },
            PaymentOutcome::Declined => PaymentResponse {
                status: "failed".to_string(),
                message: "Payment declined by subscriber".to_string(),
                transaction_reference: None,
            },
        };

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_keyed_by_last_digit() {
        assert_eq!(simulate_outcome("0977123450").unwrap(), PaymentOutcome::Success);
        assert_eq!(simulate_outcome("0977123455").unwrap(), PaymentOutcome::Success);
        assert_eq!(simulate_outcome("0977123456").unwrap(), PaymentOutcome::InsufficientFunds);
        assert_eq!(simulate_outcome("0977123457").unwrap(), PaymentOutcome::SubscriberUnreachable);
        assert_eq!(simulate_outcome("0977123458").unwrap(), PaymentOutcome::InvalidAccount);
        assert_eq!(simulate_outcome("0977123459").unwrap(), PaymentOutcome::Declined);
    }

    #[test]
    fn test_outcome_skips_trailing_non_digits() {
        // "+260 97 712 345-6 " termina en dígito 6
        assert_eq!(
            simulate_outcome("+260 97 712 345-6 ").unwrap(),
            PaymentOutcome::InsufficientFunds
        );
        assert!(simulate_outcome("no-digits").is_err());
    }

    #[test]
    fn test_transaction_reference_format() {
        let reference = generate_transaction_reference();
        assert!(reference.starts_with("TIY-"));
        assert_eq!(reference.len(), 16);
        assert!(reference[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_process_success_has_reference() {
        let service = PaymentService::new(0);
        let response = service.process("0977123451", 150.0).await.unwrap();
        assert_eq!(response.status, "success");
        assert!(response.transaction_reference.is_some());
    }

    #[tokio::test]
    async fn test_process_failure_has_no_reference() {
        let service = PaymentService::new(0);
        let response = service.process("0977123459", 150.0).await.unwrap();
        assert_eq!(response.status, "failed");
        assert!(response.transaction_reference.is_none());
    }

    #[tokio::test]
    async fn test_process_rejects_non_positive_amount() {
        let service = PaymentService::new(0);
        assert!(service.process("0977123451", 0.0).await.is_err());
        assert!(service.process("0977123451", -10.0).await.is_err());
    }
}

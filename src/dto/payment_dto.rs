use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request de pago mobile money
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub phone: String,
    pub amount: f64,
    /// Si viene, un pago exitoso marca el ticket como 'paid'
    pub ticket_id: Option<Uuid>,
}

// Response del simulador de pagos
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub status: String, // 'success' | 'pending' | 'failed'
    pub message: String,
    pub transaction_reference: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request para registrar un vendor (operador de buses)
#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    pub name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub password: String,
}

// Request para actualizar un vendor
#[derive(Debug, Deserialize)]
pub struct UpdateVendorRequest {
    pub name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

// Response de vendor (sin password)
#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub id: Uuid,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

//! Modelo de Vendor
//!
//! Un vendor es el operador de buses dueño de las routes.
//! Mapea exactamente a la tabla vendors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vendor principal - mapea exactamente a la tabla vendors
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

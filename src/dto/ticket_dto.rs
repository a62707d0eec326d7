use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request para reservar un asiento
#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub route_id: Uuid,
    pub seat_number: i32,
    /// Fecha de viaje en formato YYYY-MM-DD
    pub travel_date: String,
    pub passenger_name: String,
    pub passenger_phone: String,
}

// Request para cambiar el estado de un ticket
#[derive(Debug, Deserialize)]
pub struct UpdateTicketStatusRequest {
    pub status: String,
}

// Query params del listado admin de tickets
#[derive(Debug, Deserialize)]
pub struct TicketFilterQuery {
    pub route_id: Option<Uuid>,
    pub status: Option<String>,
}

// Response de ticket (e-ticket)
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub route_id: Uuid,
    pub user_id: Uuid,
    pub vendor_id: Uuid,
    pub seat_number: i32,
    pub travel_date: NaiveDate,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub fare: f64,
    pub status: String,
    pub payment_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

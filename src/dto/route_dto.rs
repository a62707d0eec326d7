use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request para crear una route
#[derive(Debug, Deserialize)]
pub struct CreateRouteRequest {
    pub vendor_id: Uuid,
    pub departure_city: String,
    pub destination_city: String,
    /// Hora de salida en formato HH:MM:SS
    pub departure_time: NaiveTime,
    pub fare: f64,
    pub capacity: i32,
}

// Request para actualizar una route
#[derive(Debug, Deserialize)]
pub struct UpdateRouteRequest {
    pub departure_city: Option<String>,
    pub destination_city: Option<String>,
    pub departure_time: Option<NaiveTime>,
    pub fare: Option<f64>,
    pub capacity: Option<i32>,
    pub route_status: Option<String>,
}

// Response de route
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub departure_city: String,
    pub destination_city: String,
    pub departure_time: NaiveTime,
    pub fare: f64,
    pub capacity: i32,
    pub route_status: String,
    pub created_at: DateTime<Utc>,
}

// Query params para búsqueda de routes del pasajero
#[derive(Debug, Deserialize)]
pub struct RouteSearchQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

// Query params del seat map
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMapQuery {
    pub travel_date: Option<String>,
}

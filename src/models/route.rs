//! Modelo de Route
//!
//! Una route es un viaje de bus programado: origen, destino, hora de salida,
//! tarifa y capacidad. Mapea exactamente a la tabla routes.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la ruta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RouteStatus {
    Active,
    Suspended,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Active => "active",
            RouteStatus::Suspended => "suspended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(RouteStatus::Active),
            "suspended" => Some(RouteStatus::Suspended),
            _ => None,
        }
    }
}

/// Route principal - mapea exactamente a la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub departure_city: String,
    pub destination_city: String,
    pub departure_time: NaiveTime,
    pub fare: sqlx::types::Decimal,
    pub capacity: i32,
    pub route_status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_status_roundtrip() {
        assert_eq!(RouteStatus::from_str("active"), Some(RouteStatus::Active));
        assert_eq!(RouteStatus::from_str("suspended"), Some(RouteStatus::Suspended));
        assert_eq!(RouteStatus::Active.as_str(), "active");
        assert_eq!(RouteStatus::from_str("closed"), None);
    }
}

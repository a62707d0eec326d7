//! Modelo de Ticket
//!
//! Un ticket es la reserva de un asiento sobre una route para una fecha de
//! viaje. Mapea exactamente a la tabla tickets.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados posibles de un ticket
///
/// La pertenencia al dominio se valida al escribir; las transiciones NO se
/// validan: el último PATCH gana.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TicketStatus {
    Pending,
    Paid,
    Confirmed,
    Cancelled,
    Refunded,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::Paid => "paid",
            TicketStatus::Confirmed => "confirmed",
            TicketStatus::Cancelled => "cancelled",
            TicketStatus::Refunded => "refunded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TicketStatus::Pending),
            "paid" => Some(TicketStatus::Paid),
            "confirmed" => Some(TicketStatus::Confirmed),
            "cancelled" => Some(TicketStatus::Cancelled),
            "refunded" => Some(TicketStatus::Refunded),
            _ => None,
        }
    }

    /// Un ticket cancelado o reembolsado libera su asiento
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketStatus::Cancelled | TicketStatus::Refunded)
    }
}

/// Ticket principal - mapea exactamente a la tabla tickets
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub route_id: Uuid,
    pub user_id: Uuid,
    pub vendor_id: Uuid,
    pub seat_number: i32,
    pub travel_date: NaiveDate,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub fare: sqlx::types::Decimal,
    pub status: String,
    pub payment_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_status_roundtrip() {
        for s in ["pending", "paid", "confirmed", "cancelled", "refunded"] {
            let status = TicketStatus::from_str(s).unwrap();
            assert_eq!(status.as_str(), s);
        }
        assert_eq!(TicketStatus::from_str("expired"), None);
        assert_eq!(TicketStatus::from_str("PAID"), None);
    }

    #[test]
    fn test_occupies_seat() {
        assert!(TicketStatus::Pending.occupies_seat());
        assert!(TicketStatus::Paid.occupies_seat());
        assert!(TicketStatus::Confirmed.occupies_seat());
        assert!(!TicketStatus::Cancelled.occupies_seat());
        assert!(!TicketStatus::Refunded.occupies_seat());
    }
}

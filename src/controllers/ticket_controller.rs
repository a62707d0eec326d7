use chrono::Utc;
use num_traits::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::ticket_dto::{CreateTicketRequest, TicketResponse, UpdateTicketStatusRequest};
use crate::dto::vendor_dto::ApiResponse;
use crate::models::route::RouteStatus;
use crate::models::ticket::{Ticket, TicketStatus};
use crate::repositories::notification_repository::NotificationRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::ticket_repository::TicketRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_phone, validate_seat_number, validate_travel_date};

pub struct TicketController {
    repository: TicketRepository,
    routes: RouteRepository,
    notifications: NotificationRepository,
}

impl TicketController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TicketRepository::new(pool.clone()),
            routes: RouteRepository::new(pool.clone()),
            notifications: NotificationRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateTicketRequest,
    ) -> Result<ApiResponse<TicketResponse>, AppError> {
        // Validar campos
        if request.passenger_name.trim().is_empty() {
            return Err(AppError::ValidationError("Passenger name is required".to_string()));
        }

        validate_phone(&request.passenger_phone)
            .map_err(|_| AppError::ValidationError("Invalid passenger phone number".to_string()))?;

        let travel_date = validate_travel_date(&request.travel_date)
            .map_err(|_| AppError::ValidationError("travel_date must be YYYY-MM-DD".to_string()))?;

        if travel_date < Utc::now().date_naive() {
            return Err(AppError::ValidationError("Travel date cannot be in the past".to_string()));
        }

        // La route debe existir y estar activa
        let route = self.routes
            .find_by_id(request.route_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        if route.route_status != RouteStatus::Active.as_str() {
            return Err(AppError::ValidationError("Route is not open for booking".to_string()));
        }

        validate_seat_number(request.seat_number, route.capacity)
            .map_err(|_| AppError::ValidationError(
                format!("Seat number must be between 1 and {}", route.capacity),
            ))?;

        // Chequeo previo contra doble reserva; el índice único cubre la
        // carrera entre el check y el insert
        if self.repository.seat_taken(request.route_id, travel_date, request.seat_number).await? {
            return Err(AppError::Conflict(
                "Seat already booked for this route and date".to_string(),
            ));
        }

        let ticket = self.repository.create(
            request.route_id,
            user_id,
            route.vendor_id,
            request.seat_number,
            travel_date,
            request.passenger_name,
            request.passenger_phone,
            route.fare,
        ).await?;

        // Notificar la reserva al usuario
        self.notifications.create(
            user_id,
            "Booking received".to_string(),
            format!(
                "Seat {} reserved on {} → {} for {}. Complete payment to confirm.",
                ticket.seat_number, route.departure_city, route.destination_city, ticket.travel_date,
            ),
        ).await?;

        Ok(ApiResponse::success_with_message(
            ticket_to_response(ticket),
            "Ticket booked successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TicketResponse, AppError> {
        let ticket = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        Ok(ticket_to_response(ticket))
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TicketResponse>, AppError> {
        let tickets = self.repository.find_by_user(user_id).await?;
        Ok(tickets.into_iter().map(ticket_to_response).collect())
    }

    pub async fn list_all(
        &self,
        route_id: Option<Uuid>,
        status: Option<String>,
    ) -> Result<Vec<TicketResponse>, AppError> {
        if let Some(ref s) = status {
            if TicketStatus::from_str(s).is_none() {
                return Err(AppError::ValidationError(format!("Invalid ticket status '{}'", s)));
            }
        }

        let tickets = self.repository.find_all(route_id, status).await?;
        Ok(tickets.into_iter().map(ticket_to_response).collect())
    }

    /// Cambiar el estado de un ticket. Se valida pertenencia al dominio de
    /// estados, NO la transición: el último PATCH gana.
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateTicketStatusRequest,
    ) -> Result<ApiResponse<TicketResponse>, AppError> {
        let status = TicketStatus::from_str(&request.status)
            .ok_or_else(|| AppError::ValidationError(
                format!("Invalid ticket status '{}'", request.status),
            ))?;

        let ticket = self.repository.update_status(id, status.as_str()).await?;

        // Avisar al dueño del ticket de los cambios relevantes
        if status != TicketStatus::Pending {
            let title = match status {
                TicketStatus::Paid => "Payment received",
                TicketStatus::Confirmed => "Ticket confirmed",
                TicketStatus::Cancelled => "Ticket cancelled",
                TicketStatus::Refunded => "Ticket refunded",
                TicketStatus::Pending => unreachable!(),
            };
            self.notifications.create(
                ticket.user_id,
                title.to_string(),
                format!("Your ticket for seat {} on {} is now {}.",
                    ticket.seat_number, ticket.travel_date, status.as_str()),
            ).await?;
        }

        Ok(ApiResponse::success_with_message(
            ticket_to_response(ticket),
            "Ticket status updated".to_string(),
        ))
    }
}

fn ticket_to_response(ticket: Ticket) -> TicketResponse {
    TicketResponse {
        id: ticket.id,
        route_id: ticket.route_id,
        user_id: ticket.user_id,
        vendor_id: ticket.vendor_id,
        seat_number: ticket.seat_number,
        travel_date: ticket.travel_date,
        passenger_name: ticket.passenger_name,
        passenger_phone: ticket.passenger_phone,
        fare: ticket.fare.to_f64().unwrap_or(0.0),
        status: ticket.status,
        payment_reference: ticket.payment_reference,
        created_at: ticket.created_at,
        updated_at: ticket.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_ticket_to_response_preserves_fare() {
        let now = Utc::now();
        let ticket = Ticket {
            id: Uuid::new_v4(),
            route_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vendor_id: Uuid::new_v4(),
            seat_number: 12,
            travel_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            passenger_name: "Bwalya Mwansa".to_string(),
            passenger_phone: "0977123451".to_string(),
            // 350.50 ZMW
            fare: sqlx::types::Decimal::new(35050, 2),
            status: "pending".to_string(),
            payment_reference: None,
            created_at: now,
            updated_at: now,
        };

        let response = ticket_to_response(ticket);
        assert_eq!(response.fare, 350.50);
        assert_eq!(response.seat_number, 12);
    }
}

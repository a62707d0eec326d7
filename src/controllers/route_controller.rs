use chrono::NaiveDate;
use num_traits::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::route_dto::{CreateRouteRequest, RouteResponse, UpdateRouteRequest};
use crate::dto::vendor_dto::ApiResponse;
use crate::models::route::RouteStatus;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::ticket_repository::TicketRepository;
use crate::repositories::vendor_repository::VendorRepository;
use crate::services::seat_service::{self, SeatMap};
use crate::utils::errors::AppError;
use crate::utils::validation::validate_travel_date;

pub struct RouteController {
    repository: RouteRepository,
    tickets: TicketRepository,
    vendors: VendorRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool.clone()),
            tickets: TicketRepository::new(pool.clone()),
            vendors: VendorRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRouteRequest,
    ) -> Result<ApiResponse<RouteResponse>, AppError> {
        // Validar campos
        if request.departure_city.trim().is_empty() {
            return Err(AppError::ValidationError("Departure city is required".to_string()));
        }

        if request.destination_city.trim().is_empty() {
            return Err(AppError::ValidationError("Destination city is required".to_string()));
        }

        if request.capacity < 1 {
            return Err(AppError::ValidationError("Capacity must be at least 1".to_string()));
        }

        if request.fare <= 0.0 {
            return Err(AppError::ValidationError("Fare must be greater than zero".to_string()));
        }

        // Verificar que el vendor exista
        if self.vendors.find_by_id(request.vendor_id).await?.is_none() {
            return Err(AppError::NotFound("Vendor not found".to_string()));
        }

        let fare = sqlx::types::Decimal::from_f64_retain(request.fare)
            .ok_or_else(|| AppError::ValidationError("Invalid fare value".to_string()))?;

        let route = self.repository.create(
            request.vendor_id,
            request.departure_city,
            request.destination_city,
            request.departure_time,
            fare,
            request.capacity,
        ).await?;

        Ok(ApiResponse::success_with_message(
            route_to_response(route),
            "Route created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RouteResponse, AppError> {
        let route = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        Ok(route_to_response(route))
    }

    pub async fn list_all(&self) -> Result<Vec<RouteResponse>, AppError> {
        let routes = self.repository.find_all().await?;
        Ok(routes.into_iter().map(route_to_response).collect())
    }

    /// Listado del pasajero: solo routes activas, con filtro from/to opcional
    pub async fn search(
        &self,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<Vec<RouteResponse>, AppError> {
        let routes = self.repository
            .find_active(
                from.filter(|s| !s.trim().is_empty()),
                to.filter(|s| !s.trim().is_empty()),
            )
            .await?;

        Ok(routes.into_iter().map(route_to_response).collect())
    }

    /// Seat map de una route para una fecha de viaje
    pub async fn get_seat_map(
        &self,
        route_id: Uuid,
        travel_date: Option<String>,
    ) -> Result<SeatMap, AppError> {
        let date_str = travel_date
            .ok_or_else(|| AppError::BadRequest("Query param 'travelDate' is required".to_string()))?;

        let date: NaiveDate = validate_travel_date(&date_str)
            .map_err(|_| AppError::BadRequest("travelDate must be YYYY-MM-DD".to_string()))?;

        let route = self.repository
            .find_by_id(route_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        let booked = self.tickets.booked_seats(route_id, date).await?;

        Ok(seat_service::build_seat_map(route_id, date, route.capacity, &booked))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRouteRequest,
    ) -> Result<ApiResponse<RouteResponse>, AppError> {
        if let Some(ref status) = request.route_status {
            if RouteStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(
                    format!("Invalid route status '{}'", status),
                ));
            }
        }

        if let Some(capacity) = request.capacity {
            if capacity < 1 {
                return Err(AppError::ValidationError("Capacity must be at least 1".to_string()));
            }
        }

        let fare = match request.fare {
            Some(f) => Some(
                sqlx::types::Decimal::from_f64_retain(f)
                    .ok_or_else(|| AppError::ValidationError("Invalid fare value".to_string()))?,
            ),
            None => None,
        };

        let route = self.repository.update(
            id,
            request.departure_city,
            request.destination_city,
            request.departure_time,
            fare,
            request.capacity,
            request.route_status,
        ).await?;

        Ok(ApiResponse::success_with_message(
            route_to_response(route),
            "Route updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

fn route_to_response(route: crate::models::route::Route) -> RouteResponse {
    RouteResponse {
        id: route.id,
        vendor_id: route.vendor_id,
        departure_city: route.departure_city,
        destination_city: route.destination_city,
        departure_time: route.departure_time,
        fare: route.fare.to_f64().unwrap_or(0.0),
        capacity: route.capacity,
        route_status: route.route_status,
        created_at: route.created_at,
    }
}

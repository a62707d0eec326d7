//! Rutas del pasajero: búsqueda de routes, seat maps, e-tickets
//! y notificaciones.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::notification_controller::NotificationController;
use crate::controllers::route_controller::RouteController;
use crate::controllers::ticket_controller::TicketController;
use crate::dto::notification_dto::NotificationResponse;
use crate::dto::route_dto::{RouteResponse, RouteSearchQuery, SeatMapQuery};
use crate::dto::ticket_dto::TicketResponse;
use crate::middleware::auth::authenticated_user_id;
use crate::services::seat_service::SeatMap;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/routes", get(search_routes))
        .route("/routes/:id", get(get_route))
        .route("/routes/:id/seats", get(get_seat_map))
        .route("/tickets", get(list_my_tickets))
        .route("/notifications", get(list_notifications))
        .route("/notifications/read-all", patch(mark_all_notifications_read))
        .route("/notifications/:id/read", patch(mark_notification_read))
}

async fn search_routes(
    State(state): State<AppState>,
    Query(query): Query<RouteSearchQuery>,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.search(query.from, query.to).await?;
    Ok(Json(response))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteResponse>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn get_seat_map(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<SeatMapQuery>,
) -> Result<Json<SeatMap>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.get_seat_map(id, query.travel_date).await?;
    Ok(Json(response))
}

async fn list_my_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TicketResponse>>, AppError> {
    let user_id = authenticated_user_id(&state, &headers)?;
    let controller = TicketController::new(state.pool.clone());
    let response = controller.list_by_user(user_id).await?;
    Ok(Json(response))
}

async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let user_id = authenticated_user_id(&state, &headers)?;
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.list_by_user(user_id).await?;
    Ok(Json(response))
}

async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<NotificationResponse>, AppError> {
    let user_id = authenticated_user_id(&state, &headers)?;
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.mark_read(id, user_id).await?;
    Ok(Json(response))
}

async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = authenticated_user_id(&state, &headers)?;
    let controller = NotificationController::new(state.pool.clone());
    let updated = controller.mark_all_read(user_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "updated": updated
    })))
}
